//! Common types shared across the cache model.
//!
//! It includes:
//! 1. **Constants:** Fixed geometry and policy parameters.
//! 2. **Memory Access:** Classification of last-level cache requests.
//! 3. **Error Handling:** Configuration and trace errors.

/// Fixed geometry and policy parameters.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use data::AccessKind;
pub use error::{ConfigError, TraceError};
