//! Ports - Boundary interfaces between the application core and the outside

pub mod outbound;
