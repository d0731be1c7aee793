//! Illustration references shown on the terminal screens
//!
//! Paths point into the distribution's `assets/` directory. The engine
//! never opens the files; the references are display flavor only.

use crate::domain::value_objects::ScenarioId;

/// Ordered illustration paths for one scenario, empty for unknown ids.
pub fn illustrations(id: &ScenarioId) -> &'static [&'static str] {
    match id.as_str() {
        "neon-city" => &[
            "assets/neon-city/skyline-dark.png",
            "assets/neon-city/generator-line.png",
            "assets/neon-city/first-light.png",
        ],
        "starport-fleet" => &[
            "assets/starport-fleet/array-dish.png",
            "assets/starport-fleet/hangar-assembly.png",
            "assets/starport-fleet/echo-return.png",
        ],
        "desert-oasis" => &[
            "assets/desert-oasis/staging-fires.png",
            "assets/desert-oasis/dune-sea.png",
            "assets/desert-oasis/city-gates.png",
        ],
        "whiteout-ridge" => &[
            "assets/whiteout-ridge/rescue-hut.png",
            "assets/whiteout-ridge/rope-team.png",
            "assets/whiteout-ridge/car-park.png",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::ContentCatalogPort;
    use crate::infrastructure::catalog::StaticCatalog;

    #[test]
    fn test_every_catalog_scenario_has_three_illustrations() {
        let catalog = StaticCatalog::load().expect("catalog loads");
        for scenario in catalog.scenarios() {
            let paths = illustrations(&scenario.id);
            assert_eq!(3, paths.len(), "scenario {}", scenario.id);
            for path in paths {
                assert!(
                    path.starts_with(&format!("assets/{}/", scenario.id)),
                    "path {path} escapes the scenario directory"
                );
            }
        }
    }

    #[test]
    fn test_unknown_scenario_has_no_illustrations() {
        assert!(illustrations(&ScenarioId::new("nowhere")).is_empty());
    }
}
