//! Data Transfer Objects - For presentation boundaries
//!
//! DTOs live in the application layer so the terminal front end (or any
//! embedding UI) can serialize views without pulling serde into the domain
//! model.

pub mod result_view;
pub mod session_view;

pub use result_view::{ProfileView, ResultView};
pub use session_view::{OptionView, PhaseView, ScenarioSummary, SceneView, SessionView, TallyView};
