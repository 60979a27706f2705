/// Environment lookup helpers used by the configuration loader
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
