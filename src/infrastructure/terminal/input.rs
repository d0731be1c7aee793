//! Line parsing for the interactive loop
//!
//! Parsing is screen-aware: a bare number picks a scenario on the
//! selection screen but an option while a scene is up. Anything that
//! doesn't decode becomes [`Command::Unknown`] and the loop redraws.

use crate::application::dto::PhaseView;
use crate::domain::entities::OptionKey;

/// One decoded line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Pick(OptionKey),
    Advance,
    Back,
    Restart,
    /// 1-based scenario number from the selection screen
    Select(usize),
    Unknown,
}

/// Decode one input line against the screen it was typed on
pub fn parse(line: &str, phase: PhaseView) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        // Bare Enter advances through scenes and does nothing elsewhere
        return if phase == PhaseView::Playing {
            Command::Advance
        } else {
            Command::Unknown
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        "n" | "next" => Command::Advance,
        "back" => Command::Back,
        "a" if phase == PhaseView::Playing => Command::Pick(OptionKey::A),
        "b" if phase == PhaseView::Playing => Command::Pick(OptionKey::B),
        other => parse_number(other, phase),
    }
}

fn parse_number(token: &str, phase: PhaseView) -> Command {
    let Ok(number) = token.parse::<usize>() else {
        return Command::Unknown;
    };
    match (phase, number) {
        (PhaseView::SelectingScenario, n) if n >= 1 => Command::Select(n),
        (PhaseView::Playing, 1) => Command::Pick(OptionKey::A),
        (PhaseView::Playing, 2) => Command::Pick(OptionKey::B),
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_variants_work_everywhere() {
        for line in ["q", "quit", "EXIT"] {
            assert_eq!(Command::Quit, parse(line, PhaseView::SelectingScenario));
            assert_eq!(Command::Quit, parse(line, PhaseView::ShowingResult));
        }
    }

    #[test]
    fn test_numbers_follow_the_screen() {
        assert_eq!(Command::Select(3), parse("3", PhaseView::SelectingScenario));
        assert_eq!(Command::Pick(OptionKey::A), parse("1", PhaseView::Playing));
        assert_eq!(Command::Pick(OptionKey::B), parse("2", PhaseView::Playing));
        assert_eq!(Command::Unknown, parse("3", PhaseView::Playing));
        assert_eq!(Command::Unknown, parse("1", PhaseView::ShowingResult));
    }

    #[test]
    fn test_letters_pick_only_while_playing() {
        assert_eq!(Command::Pick(OptionKey::A), parse("a", PhaseView::Playing));
        assert_eq!(Command::Pick(OptionKey::B), parse(" B ", PhaseView::Playing));
        assert_eq!(Command::Unknown, parse("a", PhaseView::SelectingScenario));
    }

    #[test]
    fn test_enter_advances_only_while_playing() {
        assert_eq!(Command::Advance, parse("", PhaseView::Playing));
        assert_eq!(Command::Advance, parse("   ", PhaseView::Playing));
        assert_eq!(Command::Unknown, parse("", PhaseView::SelectingScenario));
        assert_eq!(Command::Unknown, parse("", PhaseView::ShowingResult));
    }

    #[test]
    fn test_back_is_spelled_out_while_b_picks() {
        assert_eq!(Command::Back, parse("back", PhaseView::Playing));
        assert_eq!(Command::Pick(OptionKey::B), parse("b", PhaseView::Playing));
        assert_eq!(Command::Back, parse("BACK", PhaseView::ShowingResult));
    }

    #[test]
    fn test_zero_and_noise_decode_to_unknown() {
        assert_eq!(Command::Unknown, parse("0", PhaseView::SelectingScenario));
        assert_eq!(Command::Unknown, parse("pick the left one", PhaseView::Playing));
    }
}
