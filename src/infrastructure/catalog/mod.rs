//! Static content catalog - The authored scenarios and type profiles
//!
//! Content is assembled once per process into lazily initialized statics.
//! `StaticCatalog::load()` checks the shape the scoring rules assume
//! (scene counts, ordinals, letter pairs, profile coverage) before handing
//! out a handle, so a content mistake fails startup instead of surfacing
//! mid-quiz.

mod desert_oasis;
mod neon_city;
mod profiles;
mod starport_fleet;
mod whiteout_ridge;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::application::ports::outbound::ContentCatalogPort;
use crate::domain::entities::{
    OptionKey, Scenario, ScenarioDefect, Scene, SceneOption, TypeProfile,
};
use crate::domain::value_objects::{Dimension, ScenarioId, AXIS_ORDER};

static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        neon_city::scenario(),
        starport_fleet::scenario(),
        desert_oasis::scenario(),
        whiteout_ridge::scenario(),
    ]
});

static PROFILES: Lazy<HashMap<&'static str, TypeProfile>> = Lazy::new(profiles::by_code);

static DEFAULT_PROFILE: Lazy<TypeProfile> = Lazy::new(profiles::default_profile);

/// Defects found while checking the authored content at startup
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate scenario id: {0}")]
    DuplicateScenario(ScenarioId),

    #[error("scenario {id}: {defect}")]
    InvalidScenario {
        id: ScenarioId,
        #[source]
        defect: ScenarioDefect,
    },

    #[error("profile table has no entry for type code {0}")]
    MissingProfile(String),
}

/// Process-wide immutable catalog handle
pub struct StaticCatalog {
    scenarios: &'static [Scenario],
    profiles: &'static HashMap<&'static str, TypeProfile>,
    default_profile: &'static TypeProfile,
}

impl StaticCatalog {
    /// Validate the built-in content and expose it behind the catalog port
    pub fn load() -> Result<Self, CatalogError> {
        let scenarios: &'static [Scenario] = &SCENARIOS;

        for (index, scenario) in scenarios.iter().enumerate() {
            if scenarios[..index].iter().any(|other| other.id == scenario.id) {
                return Err(CatalogError::DuplicateScenario(scenario.id.clone()));
            }
            scenario
                .validate()
                .map_err(|defect| CatalogError::InvalidScenario {
                    id: scenario.id.clone(),
                    defect,
                })?;
        }

        for code in all_type_codes() {
            if !PROFILES.contains_key(code.as_str()) {
                return Err(CatalogError::MissingProfile(code));
            }
        }

        Ok(Self {
            scenarios,
            profiles: &PROFILES,
            default_profile: &DEFAULT_PROFILE,
        })
    }
}

impl ContentCatalogPort for StaticCatalog {
    fn scenarios(&self) -> &[Scenario] {
        self.scenarios
    }

    fn scenario(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| &scenario.id == id)
    }

    fn profile(&self, code: &str) -> Option<&TypeProfile> {
        self.profiles.get(code)
    }

    fn default_profile(&self) -> &TypeProfile {
        self.default_profile
    }
}

/// Every 4-letter code the axes can produce, in no particular order
fn all_type_codes() -> Vec<String> {
    let [energy, information, decision, rhythm] = AXIS_ORDER;
    let mut codes = Vec::with_capacity(16);
    for a in [energy.left(), energy.right()] {
        for b in [information.left(), information.right()] {
            for c in [decision.left(), decision.right()] {
                for d in [rhythm.left(), rhythm.right()] {
                    codes.push([a, b, c, d].iter().map(|letter| letter.as_char()).collect());
                }
            }
        }
    }
    codes
}

/// Build one scene from its text parts
///
/// Option A always carries the axis's left letter and option B the right
/// letter; `first` and `second` are each (title, hint).
fn scene(
    ordinal: u32,
    dimension: Dimension,
    title: &str,
    narrative: &str,
    prompt: &str,
    first: (&str, &str),
    second: (&str, &str),
) -> Scene {
    Scene::new(
        ordinal,
        title,
        dimension,
        SceneOption::new(OptionKey::A, first.0, dimension.left()).with_hint(first.1),
        SceneOption::new(OptionKey::B, second.0, dimension.right()).with_hint(second.1),
    )
    .with_narrative(narrative)
    .with_prompt(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_content_loads() {
        assert!(StaticCatalog::load().is_ok());
    }

    #[test]
    fn test_four_scenarios_with_twenty_scenes_each() {
        let catalog = StaticCatalog::load().expect("content should validate");
        let ids: Vec<&str> = catalog.scenarios().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["neon-city", "starport-fleet", "desert-oasis", "whiteout-ridge"]
        );
        for scenario in catalog.scenarios() {
            assert_eq!(scenario.scene_count(), 20, "{}", scenario.id);
            assert!(!scenario.tagline.is_empty());
            assert!(!scenario.description.is_empty());
        }
    }

    #[test]
    fn test_scenes_rotate_axes_in_fixed_order() {
        let catalog = StaticCatalog::load().expect("content should validate");
        for scenario in catalog.scenarios() {
            for (index, scene) in scenario.scenes.iter().enumerate() {
                assert_eq!(
                    scene.dimension,
                    AXIS_ORDER[index % AXIS_ORDER.len()],
                    "{} scene {}",
                    scenario.id,
                    scene.ordinal
                );
                assert!(scene.options_cover_dimension());
            }
        }
    }

    #[test]
    fn test_each_axis_gets_five_scenes_per_scenario() {
        let catalog = StaticCatalog::load().expect("content should validate");
        for scenario in catalog.scenarios() {
            for dimension in AXIS_ORDER {
                let count = scenario
                    .scenes
                    .iter()
                    .filter(|scene| scene.dimension == dimension)
                    .count();
                assert_eq!(count, 5, "{} {:?}", scenario.id, dimension);
            }
        }
    }

    #[test]
    fn test_every_scene_has_text() {
        let catalog = StaticCatalog::load().expect("content should validate");
        for scenario in catalog.scenarios() {
            for scene in &scenario.scenes {
                assert!(!scene.title.is_empty());
                assert!(!scene.narrative.is_empty());
                assert!(!scene.prompt.is_empty());
                for option in &scene.options {
                    assert!(!option.title.is_empty());
                    assert!(!option.hint.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_profiles_cover_all_sixteen_codes() {
        let catalog = StaticCatalog::load().expect("content should validate");
        let codes = all_type_codes();
        assert_eq!(codes.len(), 16);
        for code in &codes {
            let profile = catalog.profile(code);
            assert!(profile.is_some(), "missing profile for {}", code);
        }
        let names: Vec<&str> = codes
            .iter()
            .filter_map(|code| catalog.profile(code))
            .map(|profile| profile.name.as_str())
            .collect();
        let distinct: std::collections::HashSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), 16, "each code should get its own profile");
        // The fallback is its own entry, not one of the sixteen
        assert!(!names.contains(&catalog.default_profile().name.as_str()));
    }

    #[test]
    fn test_unknown_code_misses_the_table() {
        let catalog = StaticCatalog::load().expect("content should validate");
        assert!(catalog.profile("XXXX").is_none());
        assert!(!catalog.default_profile().name.is_empty());
    }

    #[test]
    fn test_scenario_lookup_by_slug() {
        let catalog = StaticCatalog::load().expect("content should validate");
        let scenario = catalog.scenario(&ScenarioId::new("desert-oasis"));
        assert!(scenario.is_some());
        assert!(catalog.scenario(&ScenarioId::new("missing-story")).is_none());
    }
}
