//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog: The built-in scenario and profile content
//! - Assets: Illustration references for the screens
//! - Config: Application configuration from the environment
//! - Terminal: The readline front end

pub mod assets;
pub mod catalog;
pub mod config;
pub mod terminal;
