//! Error definitions.
//!
//! The replacement policy itself has no failure modes; every counter saturates
//! and every index comes from the host. Errors exist only on the surfaces
//! around it:
//! 1. **Configuration:** Rejecting host parameters that cannot describe a cache.
//! 2. **Traces:** Reading and parsing access traces for replay.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid host configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one core must be modeled.
    #[error("num_cores must be at least 1")]
    NoCores,

    /// At least one set per core must be modeled.
    #[error("sets_per_core must be at least 1")]
    NoSets,

    /// Host line size must be a non-zero power of two.
    #[error("line_bytes must be a non-zero power of two, got {0}")]
    LineSize(usize),

    /// The configuration document could not be decoded.
    #[error("malformed configuration: {0}")]
    Parse(String),
}

/// Failure while loading or parsing an access trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A record did not have the four expected fields.
    #[error("line {line}: expected `<core> <pc> <address> <kind>`, found {fields} field(s)")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields present.
        fields: usize,
    },

    /// A numeric field was not decimal or `0x` hexadecimal.
    #[error("line {line}: invalid number `{value}`")]
    Number {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        value: String,
    },

    /// The access kind was not recognised.
    #[error("line {line}: unknown access kind `{value}`")]
    Kind {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        value: String,
    },

    /// The core index exceeds the configured core count.
    #[error("line {line}: core {core} out of range (num_cores = {num_cores})")]
    Core {
        /// 1-based line number.
        line: usize,
        /// Core index found in the trace.
        core: usize,
        /// Configured number of cores.
        num_cores: usize,
    },
}
