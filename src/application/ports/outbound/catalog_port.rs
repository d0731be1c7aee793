//! Catalog port - Interface for read-only quiz content
//!
//! The application service depends on this trait, not on the concrete
//! catalog, so tests can swap in hand-built content.

use crate::domain::entities::{Scenario, TypeProfile};
use crate::domain::value_objects::ScenarioId;

/// Read-only access to the authored content the quiz runs on
pub trait ContentCatalogPort: Send + Sync {
    /// All scenarios, in display order
    fn scenarios(&self) -> &[Scenario];

    /// Look up a scenario by id
    fn scenario(&self, id: &ScenarioId) -> Option<&Scenario>;

    /// Look up the profile for an exact 4-letter type code
    fn profile(&self, code: &str) -> Option<&TypeProfile>;

    /// The profile returned when no code matches
    fn default_profile(&self) -> &TypeProfile;
}
