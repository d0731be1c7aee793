//! Domain services - Pure business logic operations

pub mod scoring;

pub use scoring::{personality_outcome, tally_dimensions, AxisTally, PersonalityOutcome, TallyReport};
