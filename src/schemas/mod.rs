// Data structures shared across the installer.

// GitHub release feed types and the version map.
pub mod common;
// Fatal and advisory error types.
pub mod errors;
// Resolved run configuration.
pub mod settings;
