/// Client facade owning the shared executor
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces (one trait per resource)
pub mod interfaces;
/// Service implementations backed by the shared executor
pub mod services;
