//! Value objects - Immutable objects defined by their attributes

mod dimension;
mod ids;

pub use dimension::{Dimension, Letter, AXIS_ORDER};
pub use ids::{ScenarioId, SessionId};
