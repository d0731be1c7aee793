//! Domain entities - Core business objects with identity

mod profile;
mod scenario;
mod scene;

pub use profile::TypeProfile;
pub use scenario::{Scenario, ScenarioDefect, SCENES_PER_SCENARIO};
pub use scene::{OptionKey, Scene, SceneOption};
