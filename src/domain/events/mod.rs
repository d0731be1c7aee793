//! Domain events - Notifications of state changes within the domain

pub mod session_events;

pub use session_events::{EventMetadata, SessionEvent};
