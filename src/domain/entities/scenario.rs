//! Scenario entity - An authored story of twenty binary decisions

use crate::domain::entities::Scene;
use crate::domain::value_objects::ScenarioId;

/// Number of scenes every scenario must contain
pub const SCENES_PER_SCENARIO: usize = 20;

/// A scenario - an immutable bundle of scenes plus display metadata
#[derive(Debug, Clone)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    /// One-line teaser shown on the selection screen
    pub tagline: String,
    /// Longer framing shown when the story starts
    pub description: String,
    /// Scenes in play order
    pub scenes: Vec<Scene>,
}

impl Scenario {
    pub fn new(id: ScenarioId, title: impl Into<String>, scenes: Vec<Scene>) -> Self {
        Self {
            id,
            title: title.into(),
            tagline: String::new(),
            description: String::new(),
            scenes,
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Check the authored content holds the shape the scoring rules assume
    ///
    /// # Invariants
    /// - Exactly [`SCENES_PER_SCENARIO`] scenes
    /// - Ordinals run 1..=N in play order
    /// - Each scene's options carry exactly its dimension's letter pair
    pub fn validate(&self) -> Result<(), ScenarioDefect> {
        if self.scenes.len() != SCENES_PER_SCENARIO {
            return Err(ScenarioDefect::SceneCount {
                expected: SCENES_PER_SCENARIO,
                actual: self.scenes.len(),
            });
        }
        for (index, scene) in self.scenes.iter().enumerate() {
            let expected = index as u32 + 1;
            if scene.ordinal != expected {
                return Err(ScenarioDefect::OrdinalMismatch {
                    expected,
                    actual: scene.ordinal,
                });
            }
            if !scene.options_cover_dimension() {
                return Err(ScenarioDefect::LetterMismatch {
                    ordinal: scene.ordinal,
                });
            }
        }
        Ok(())
    }
}

/// Content defects a scenario definition can carry
#[derive(Debug, thiserror::Error)]
pub enum ScenarioDefect {
    #[error("expected {expected} scenes, found {actual}")]
    SceneCount { expected: usize, actual: usize },

    #[error("scene at play position {expected} carries ordinal {actual}")]
    OrdinalMismatch { expected: u32, actual: u32 },

    #[error("scene {ordinal}: options do not cover the scene's letter pair")]
    LetterMismatch { ordinal: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{OptionKey, SceneOption};
    use crate::domain::value_objects::{Dimension, AXIS_ORDER};

    fn well_formed_scenes() -> Vec<Scene> {
        (0..SCENES_PER_SCENARIO)
            .map(|index| {
                let dimension = AXIS_ORDER[index % AXIS_ORDER.len()];
                Scene::new(
                    index as u32 + 1,
                    format!("Scene {}", index + 1),
                    dimension,
                    SceneOption::new(OptionKey::A, "left", dimension.left()),
                    SceneOption::new(OptionKey::B, "right", dimension.right()),
                )
            })
            .collect()
    }

    #[test]
    fn test_valid_scenario_passes() {
        let scenario =
            Scenario::new(ScenarioId::new("test-story"), "Test Story", well_formed_scenes())
                .with_tagline("twenty small calls");
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.scene_count(), SCENES_PER_SCENARIO);
    }

    #[test]
    fn test_short_scenario_is_rejected() {
        let mut scenes = well_formed_scenes();
        scenes.truncate(19);
        let scenario = Scenario::new(ScenarioId::new("short"), "Short", scenes);
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioDefect::SceneCount { actual: 19, .. })
        ));
    }

    #[test]
    fn test_bad_ordinal_is_rejected() {
        let mut scenes = well_formed_scenes();
        scenes[4].ordinal = 99;
        let scenario = Scenario::new(ScenarioId::new("bad-ordinal"), "Bad Ordinal", scenes);
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioDefect::OrdinalMismatch { expected: 5, actual: 99 })
        ));
    }

    #[test]
    fn test_letter_mismatch_is_rejected() {
        let mut scenes = well_formed_scenes();
        // Point scene 3's B option at the wrong side of its axis
        let scene = &mut scenes[2];
        scene.options[1].letter = scene.dimension.left();
        let scenario = Scenario::new(ScenarioId::new("bad-letters"), "Bad Letters", scenes);
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioDefect::LetterMismatch { ordinal: 3 })
        ));
    }

    #[test]
    fn test_dimensions_rotate_through_axis_order() {
        let scenes = well_formed_scenes();
        for chunk in scenes.chunks(AXIS_ORDER.len()) {
            let dims: Vec<Dimension> = chunk.iter().map(|s| s.dimension).collect();
            assert_eq!(dims, AXIS_ORDER.to_vec());
        }
    }
}
