//! Shared test infrastructure.

/// Configurations and access builders.
pub mod harness;
