//! Outbound ports - Interfaces that the application requires from external systems

mod catalog_port;

pub use catalog_port::ContentCatalogPort;
