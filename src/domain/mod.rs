//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Scenario, Scene, TypeProfile
//! - Value Objects: Dimension, Letter, identifier newtypes
//! - Aggregates: Quiz session root with its guarded transitions
//! - Domain Events: State changes recorded per sitting
//! - Domain Services: Pure scoring over the slot sequence

pub mod aggregates;
pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;
