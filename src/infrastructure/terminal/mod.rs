//! Interactive terminal front end
//!
//! A synchronous readline loop over the quiz service: draw the screen for
//! the current phase, read a line, apply the decoded command, repeat.
//! Refused actions never error; they leave a hint and the loop redraws.

mod input;
mod screens;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::application::dto::PhaseView;
use crate::application::services::QuizService;
use crate::domain::value_objects::ScenarioId;
use crate::infrastructure::assets;
use crate::infrastructure::config::AppConfig;

use input::Command;

/// Run the interactive loop until the player quits
pub fn run(service: &mut dyn QuizService, config: &AppConfig) -> Result<()> {
    if !config.color {
        colored::control::set_override(false);
    }

    let mut rl = DefaultEditor::new()?;
    println!("{}", screens::banner());

    if let Some(slug) = &config.preselect_scenario {
        if service.select_scenario(&ScenarioId::new(slug.clone())) {
            print_intro(service);
        } else {
            warn!(
                scenario = %slug,
                "QUIZ_SCENARIO does not match a catalog story, showing the selection screen"
            );
        }
    }

    loop {
        draw(service);
        match rl.readline(">> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(&line);
                }
                if !dispatch(service, config, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Interrupted.".yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Print the screen matching the session's current phase
fn draw(service: &dyn QuizService) {
    let view = service.snapshot();
    match view.phase {
        PhaseView::SelectingScenario => {
            println!("{}", screens::selection_screen(&service.scenario_choices()));
        }
        PhaseView::Playing => {
            if let (Some(scenario), Some(scene)) = (&view.scenario, &view.scene) {
                println!(
                    "{}",
                    screens::scene_screen(scenario, scene, view.answered, view.total_scenes)
                );
            }
        }
        PhaseView::ShowingResult => {
            if let Some(result) = service.result() {
                let id = ScenarioId::new(result.scenario.id.clone());
                println!("{}", screens::result_screen(&result, assets::illustrations(&id)));
            }
        }
    }
}

/// Apply one input line; returns false when the player quits
fn dispatch(service: &mut dyn QuizService, config: &AppConfig, line: &str) -> bool {
    let phase = service.snapshot().phase;
    match input::parse(line, phase) {
        Command::Quit => {
            println!("{}", "Goodbye!".bright_green());
            return false;
        }
        Command::Select(number) => {
            let choices = service.scenario_choices();
            let applied = choices
                .get(number - 1)
                .map(|choice| service.select_scenario(&ScenarioId::new(choice.id.clone())))
                .unwrap_or(false);
            if applied {
                print_intro(service);
            } else {
                hint(&format!("Pick a story between 1 and {}", choices.len()));
            }
        }
        Command::Pick(key) => {
            if !service.pick_option(key) {
                hint("No scene is on screen");
            }
        }
        Command::Advance => {
            if !service.advance() {
                hint("Pick an option first");
            } else if service.snapshot().phase == PhaseView::ShowingResult {
                emit_result_json(service, config);
            }
        }
        Command::Back => {
            if !service.step_back() {
                hint("There's no scene behind this one");
            }
        }
        Command::Restart => {
            if !service.restart() {
                hint("No story is running");
            }
        }
        Command::Unknown => hint("Commands: a number, a/b, Enter, back, r, q"),
    }
    true
}

fn hint(text: &str) {
    println!("{}", text.bright_black());
}

/// Print the framing paragraph for the story that just started
fn print_intro(service: &dyn QuizService) {
    if let Some(summary) = service.snapshot().scenario {
        println!("{}", screens::story_intro(&summary));
    }
}

/// Print the result view as pretty JSON when QUIZ_RESULT_JSON asks for it
fn emit_result_json(service: &dyn QuizService, config: &AppConfig) {
    if !config.result_json {
        return;
    }
    if let Some(result) = service.result() {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(error) => warn!(%error, "Result view did not serialize"),
        }
    }
}
