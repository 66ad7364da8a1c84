//! Memory Access Types.
//!
//! Classifies the requests that reach the last-level cache. The policy accepts
//! the kind on both entry points for interface compatibility with the host but
//! does not consult it; the trace reader and the tag-array host use it for
//! parsing and dirty tracking.

use std::fmt;
use std::str::FromStr;

/// Type of request arriving at the last-level cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AccessKind {
    /// Demand data load.
    #[default]
    Load,

    /// Read-for-ownership issued by a store miss in an upper level.
    Rfo,

    /// Hardware prefetch request.
    Prefetch,

    /// Dirty line written back from an upper level.
    Writeback,
}

impl AccessKind {
    /// Returns `true` when the request leaves the line dirty.
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Rfo | Self::Writeback)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "LOAD",
            Self::Rfo => "RFO",
            Self::Prefetch => "PREFETCH",
            Self::Writeback => "WRITEBACK",
        };
        f.write_str(name)
    }
}

impl FromStr for AccessKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOAD" => Ok(Self::Load),
            "RFO" => Ok(Self::Rfo),
            "PREFETCH" => Ok(Self::Prefetch),
            "WRITEBACK" => Ok(Self::Writeback),
            _ => Err(s.to_string()),
        }
    }
}
