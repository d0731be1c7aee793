//! Scoring - Pure tally and type-code computation over a slot sequence
//!
//! Both routines are deterministic functions of the slot sequence with no
//! side effects: callers recompute freely whenever the sequence changes.

use crate::domain::aggregates::SceneSlot;
use crate::domain::value_objects::{Dimension, Letter, AXIS_ORDER};

/// Counts and derived stats for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTally {
    pub dimension: Dimension,
    pub left_count: u32,
    pub right_count: u32,
    /// Share of answered scenes on this axis that picked the left letter.
    /// Exactly 50 when the axis has no answers yet.
    pub percent: f64,
    /// The strictly leading letter; `None` when untouched or tied
    pub dominant: Option<Letter>,
}

impl AxisTally {
    fn from_counts(dimension: Dimension, left_count: u32, right_count: u32) -> Self {
        let total = left_count + right_count;
        let (percent, dominant) = if total == 0 {
            (50.0, None)
        } else {
            let percent = f64::from(left_count) * 100.0 / f64::from(total);
            let dominant = if left_count > right_count {
                Some(dimension.left())
            } else if right_count > left_count {
                Some(dimension.right())
            } else {
                None
            };
            (percent, dominant)
        };
        Self {
            dimension,
            left_count,
            right_count,
            percent,
            dominant,
        }
    }
}

/// Per-axis tallies plus the overall progress count
#[derive(Debug, Clone, PartialEq)]
pub struct TallyReport {
    /// One entry per axis, in fixed axis order
    pub axes: [AxisTally; 4],
    /// Number of answered slots, for progress display
    pub answered: usize,
}

/// The decided type once every slot is filled
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityOutcome {
    /// 4-letter code, one letter per axis in fixed axis order
    pub code: String,
    pub letters: [Letter; 4],
}

fn axis_position(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Energy => 0,
        Dimension::Information => 1,
        Dimension::Decision => 2,
        Dimension::Rhythm => 3,
    }
}

/// Count answered slots per axis and derive percentages and leaders
///
/// Works on partial sequences: empty slots are skipped, untouched axes
/// report 50 percent with no dominant letter.
pub fn tally_dimensions(slots: &[SceneSlot]) -> TallyReport {
    let mut lefts = [0u32; 4];
    let mut rights = [0u32; 4];
    let mut answered = 0usize;

    for slot in slots {
        if let Some(key) = slot.picked {
            answered += 1;
            let dimension = slot.scene.dimension;
            let letter = slot.scene.option(key).letter;
            let position = axis_position(dimension);
            // Letters outside the scene's axis are ignored; catalog
            // validation keeps them out of authored content
            if letter == dimension.left() {
                lefts[position] += 1;
            } else if letter == dimension.right() {
                rights[position] += 1;
            }
        }
    }

    let axes = std::array::from_fn(|position| {
        AxisTally::from_counts(AXIS_ORDER[position], lefts[position], rights[position])
    });

    TallyReport { axes, answered }
}

/// Decide the final 4-letter type from a complete slot sequence
///
/// Returns `None` while any slot is empty (or the sequence itself is
/// empty). Ties on an axis resolve to the letter of the last-visited scene
/// of that axis; an axis with no scenes at all falls back to its left
/// letter.
pub fn personality_outcome(slots: &[SceneSlot]) -> Option<PersonalityOutcome> {
    if slots.is_empty() || slots.iter().any(|slot| !slot.is_answered()) {
        return None;
    }

    let mut lefts = [0u32; 4];
    let mut rights = [0u32; 4];
    let mut last_picks: [Option<Letter>; 4] = [None; 4];

    for slot in slots {
        if let Some(key) = slot.picked {
            let dimension = slot.scene.dimension;
            let letter = slot.scene.option(key).letter;
            let position = axis_position(dimension);
            if letter == dimension.left() {
                lefts[position] += 1;
            } else if letter == dimension.right() {
                rights[position] += 1;
            }
            last_picks[position] = Some(letter);
        }
    }

    let mut letters = [Letter::E; 4];
    for (position, dimension) in AXIS_ORDER.iter().enumerate() {
        letters[position] = if lefts[position] > rights[position] {
            dimension.left()
        } else if rights[position] > lefts[position] {
            dimension.right()
        } else {
            last_picks[position].unwrap_or(dimension.left())
        };
    }

    let code: String = letters.iter().map(|letter| letter.as_char()).collect();
    Some(PersonalityOutcome { code, letters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{OptionKey, Scene, SceneOption};

    fn scene_for(ordinal: u32, dimension: Dimension) -> Scene {
        Scene::new(
            ordinal,
            format!("Scene {}", ordinal),
            dimension,
            SceneOption::new(OptionKey::A, "left", dimension.left()),
            SceneOption::new(OptionKey::B, "right", dimension.right()),
        )
    }

    /// Slots cycling through the axis order, one pick per entry
    fn slots_with_picks(picks: &[Option<OptionKey>]) -> Vec<SceneSlot> {
        picks
            .iter()
            .enumerate()
            .map(|(index, picked)| SceneSlot {
                scene: scene_for(index as u32 + 1, AXIS_ORDER[index % AXIS_ORDER.len()]),
                picked: *picked,
            })
            .collect()
    }

    fn all_picked(count: usize, key: OptionKey) -> Vec<Option<OptionKey>> {
        vec![Some(key); count]
    }

    #[test]
    fn test_tally_counts_cover_each_axis() {
        let slots = slots_with_picks(&all_picked(20, OptionKey::A));
        let report = tally_dimensions(&slots);

        assert_eq!(report.answered, 20);
        for tally in &report.axes {
            assert_eq!(tally.left_count + tally.right_count, 5);
            assert_eq!(tally.left_count, 5);
            assert_eq!(tally.percent, 100.0);
            assert_eq!(tally.dominant, Some(tally.dimension.left()));
        }
    }

    #[test]
    fn test_tally_percent_follows_left_share() {
        // Energy scenes sit at indices 0, 4, 8, 12, 16; push one to the right
        let mut picks = all_picked(20, OptionKey::A);
        picks[16] = Some(OptionKey::B);
        let report = tally_dimensions(&slots_with_picks(&picks));

        let energy = report.axes[0];
        assert_eq!(energy.left_count, 4);
        assert_eq!(energy.right_count, 1);
        assert_eq!(energy.percent, 80.0);
        assert_eq!(energy.dominant, Some(Letter::E));
    }

    #[test]
    fn test_untouched_axis_reads_fifty_fifty() {
        // Only scene 2 (Information) answered
        let mut picks = vec![None; 20];
        picks[1] = Some(OptionKey::A);
        let report = tally_dimensions(&slots_with_picks(&picks));

        assert_eq!(report.answered, 1);
        let energy = report.axes[0];
        assert_eq!(energy.percent, 50.0);
        assert_eq!(energy.dominant, None);
        let information = report.axes[1];
        assert_eq!(information.percent, 100.0);
        assert_eq!(information.dominant, Some(Letter::S));
    }

    #[test]
    fn test_tied_axis_has_no_dominant() {
        // Two scenes per axis; split the Energy axis 1-1
        let mut picks = all_picked(8, OptionKey::A);
        picks[4] = Some(OptionKey::B);
        let report = tally_dimensions(&slots_with_picks(&picks));

        let energy = report.axes[0];
        assert_eq!((energy.left_count, energy.right_count), (1, 1));
        assert_eq!(energy.percent, 50.0);
        assert_eq!(energy.dominant, None);
    }

    #[test]
    fn test_outcome_requires_complete_sequence() {
        assert_eq!(personality_outcome(&[]), None);

        let mut picks = all_picked(20, OptionKey::A);
        picks[7] = None;
        assert_eq!(personality_outcome(&slots_with_picks(&picks)), None);
    }

    #[test]
    fn test_partial_progress_still_counts() {
        let mut picks = vec![None; 20];
        for slot in picks.iter_mut().take(5) {
            *slot = Some(OptionKey::A);
        }
        let slots = slots_with_picks(&picks);

        assert_eq!(tally_dimensions(&slots).answered, 5);
        assert_eq!(personality_outcome(&slots), None);
    }

    #[test]
    fn test_all_left_picks_spell_estj() {
        let slots = slots_with_picks(&all_picked(20, OptionKey::A));
        let outcome = personality_outcome(&slots).unwrap();

        assert_eq!(outcome.code, "ESTJ");
        assert_eq!(outcome.letters, [Letter::E, Letter::S, Letter::T, Letter::J]);
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let mut picks = all_picked(20, OptionKey::A);
        picks[2] = Some(OptionKey::B);
        picks[10] = Some(OptionKey::B);
        let slots = slots_with_picks(&picks);

        assert_eq!(personality_outcome(&slots), personality_outcome(&slots));
    }

    #[test]
    fn test_tie_resolves_to_last_visited_pick() {
        // Two scenes per axis; Energy lands 1-1 with the later scene
        // (index 4) picking the right letter
        let mut picks = all_picked(8, OptionKey::A);
        picks[0] = Some(OptionKey::A);
        picks[4] = Some(OptionKey::B);
        let outcome = personality_outcome(&slots_with_picks(&picks)).unwrap();
        assert_eq!(outcome.letters[0], Letter::I);
        assert_eq!(outcome.code, "ISTJ");

        // Flip the visit order of the picks and the tie flips with it
        let mut picks = all_picked(8, OptionKey::A);
        picks[0] = Some(OptionKey::B);
        picks[4] = Some(OptionKey::A);
        let outcome = personality_outcome(&slots_with_picks(&picks)).unwrap();
        assert_eq!(outcome.letters[0], Letter::E);
        assert_eq!(outcome.code, "ESTJ");
    }

    #[test]
    fn test_axis_without_scenes_falls_back_left() {
        // Four scenes, all on the Energy axis: the other three axes never
        // record a pick and fall back to their left letters
        let slots: Vec<SceneSlot> = (0..4)
            .map(|index| SceneSlot {
                scene: scene_for(index as u32 + 1, Dimension::Energy),
                picked: Some(OptionKey::B),
            })
            .collect();
        let outcome = personality_outcome(&slots).unwrap();

        assert_eq!(outcome.code, "ISTJ");
    }
}
