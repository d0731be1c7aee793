//! Aggregates - Cluster of domain objects treated as a single unit

pub mod quiz_session;

pub use quiz_session::{QuizSession, SceneSlot, SessionPhase, StoryRun};
