//! Access Trace Loading.
//!
//! This module reads the text traces replayed through the cache model. It performs:
//! 1. **Loading:** Reads a trace file from disk.
//! 2. **Parsing:** Decodes one `<core> <pc> <address> <kind>` record per line,
//!    skipping blank lines and `#` comments.
//!
//! Numbers may be decimal or `0x`-prefixed hexadecimal. Kinds are `LOAD`,
//! `RFO`, `PREFETCH`, or `WRITEBACK`, case-insensitive.

use std::fs;
use std::path::Path;

use crate::common::AccessKind;
use crate::common::error::TraceError;

/// One record of an access trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceAccess {
    /// Requesting core.
    pub core: usize,
    /// Program counter of the triggering instruction.
    pub pc: u64,
    /// Physical address.
    pub address: u64,
    /// Request type.
    pub kind: AccessKind,
}

fn parse_number(token: &str, line: usize) -> Result<u64, TraceError> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|_| TraceError::Number {
        line,
        value: token.to_string(),
    })
}

/// Parses trace text.
///
/// # Arguments
///
/// * `text` - The trace contents.
/// * `num_cores` - Configured core count; records naming a higher core are rejected.
///
/// # Errors
///
/// Returns the first malformed record, with its 1-based line number.
pub fn parse_trace(text: &str, num_cores: usize) -> Result<Vec<TraceAccess>, TraceError> {
    let mut accesses = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let record = raw.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = record.split_whitespace().collect();
        let [core, pc, address, kind] = fields.as_slice() else {
            return Err(TraceError::FieldCount {
                line,
                fields: fields.len(),
            });
        };

        let core = parse_number(core, line)? as usize;
        if core >= num_cores {
            return Err(TraceError::Core {
                line,
                core,
                num_cores,
            });
        }
        let kind = kind
            .parse::<AccessKind>()
            .map_err(|value| TraceError::Kind { line, value })?;

        accesses.push(TraceAccess {
            core,
            pc: parse_number(pc, line)?,
            address: parse_number(address, line)?,
            kind,
        });
    }
    Ok(accesses)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be read, or any parse error.
pub fn load_trace(path: &Path, num_cores: usize) -> Result<Vec<TraceAccess>, TraceError> {
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&text, num_cores)
}
