//! Application layer - Use cases orchestrating the domain
//!
//! Services drive the session aggregate, ports declare what the application
//! needs from the outside, and DTOs carry read-only projections to the
//! presentation layer.

pub mod dto;
pub mod ports;
pub mod services;
