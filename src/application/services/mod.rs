//! Application services - Use case implementations
//!
//! This module contains the application services that implement the use cases
//! for the Crossroads Engine. Each service follows hexagonal architecture
//! principles, accepting port dependencies and returning DTOs.

pub mod quiz_service;

pub use quiz_service::{QuizService, QuizServiceImpl};
