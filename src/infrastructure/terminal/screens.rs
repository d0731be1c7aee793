//! Screen rendering for the terminal front end
//!
//! Render functions build strings; the loop owns all printing.

use colored::Colorize;

use crate::application::dto::{ResultView, ScenarioSummary, SceneView, TallyView};

const METER_WIDTH: usize = 20;

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "=== Crossroads ===".bright_magenta().bold(),
        "Twenty scenes, two choices each. Let's find out who shows up.".bright_black()
    )
}

/// Framing paragraph printed once when a story starts
pub fn story_intro(scenario: &ScenarioSummary) -> String {
    format!(
        "\n{}\n{}",
        scenario.title.bright_magenta().bold(),
        scenario.description.italic()
    )
}

/// Numbered list of stories to start
pub fn selection_screen(choices: &[ScenarioSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Choose your story".bold()));
    for (index, choice) in choices.iter().enumerate() {
        out.push_str(&format!(
            "  {} {} {}\n",
            format!("{}.", index + 1).cyan(),
            choice.title.bold(),
            format!("({} scenes)", choice.scene_count).bright_black()
        ));
        out.push_str(&format!("     {}\n", choice.tagline.bright_black()));
    }
    out.push_str(&format!(
        "\n{}",
        "Type a story number to begin, or q to quit".bright_black()
    ));
    out
}

/// The scene currently on screen, with its two options
pub fn scene_screen(
    scenario: &ScenarioSummary,
    scene: &SceneView,
    answered: usize,
    total: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}  {}\n",
        scenario.title.bright_magenta().bold(),
        format!("scene {}/{}, {} answered", scene.ordinal, total, answered).bright_black()
    ));
    out.push_str(&format!("{}\n", scene.title.bold()));
    out.push_str(&format!("{}\n\n", scene.narrative));
    out.push_str(&format!("{}\n", scene.prompt.yellow()));
    for option in &scene.options {
        let marker = if scene.picked.as_deref() == Some(option.key.as_str()) {
            ">".green().bold().to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            "  {} {} {}\n       {}\n",
            marker,
            format!("[{}]", option.key).cyan(),
            option.title.bold(),
            option.hint.bright_black()
        ));
    }
    out.push_str(&format!(
        "\n{}",
        "1/a or 2/b picks, Enter advances, back returns, r restarts, q quits".bright_black()
    ));
    out
}

/// The revealed personality card with per-axis meters
pub fn result_screen(result: &ResultView, illustrations: &[&str]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}  {}\n",
        result.type_code.bright_magenta().bold(),
        result.profile.name.bold()
    ));
    out.push_str(&format!(
        "{}\n\n",
        format!("after {}", result.scenario.title).bright_black()
    ));
    out.push_str(&format!("{}\n\n", result.profile.description));
    out.push_str(&format!(
        "{}\n{}\n\n",
        "Working with you".bold(),
        result.profile.cooperation
    ));
    for tally in &result.tallies {
        out.push_str(&tally_line(tally));
    }
    out.push_str(&format!(
        "  {}\n",
        format!("{} scenes answered", result.answered).bright_black()
    ));
    if !illustrations.is_empty() {
        out.push_str(&format!("\n{}\n", "Illustrations".bold()));
        for path in illustrations {
            out.push_str(&format!("  {}\n", path.bright_black()));
        }
    }
    out.push_str(&format!(
        "\n{}",
        "r starts a new story, q quits".bright_black()
    ));
    out
}

fn tally_line(tally: &TallyView) -> String {
    let leaning = match tally.dominant {
        Some(letter) => format!("leaning {letter}"),
        None => "even".to_string(),
    };
    format!(
        "  {}  {}  {}\n",
        tally.axis.cyan(),
        meter(tally.percent, METER_WIDTH),
        format!(
            "{} {} / {} {}, {}",
            tally.left_count, tally.left_letter, tally.right_count, tally.right_letter, leaning
        )
        .bright_black()
    )
}

/// Fixed-width bar filled from the left according to `percent`
fn meter(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
