//! SHiP-RRIP last-level cache replacement library.
//!
//! This crate implements a signature-based hit predictor over RRIP replacement
//! for a set-associative last-level cache model:
//! 1. **Policy:** Saturating counters, the signature history counter table,
//!    per-line replacement records, victim selection, and state training.
//! 2. **Host:** A tag-array cache model that drives the policy access by access.
//! 3. **Simulation:** Configuration, trace loading and replay, and statistics reporting.

/// Common types and constants (fixed parameters, access kinds, errors).
pub mod common;
/// Host configuration (cores, sets, policy variant, SHCT scope).
pub mod config;
/// Last-level cache model and replacement policies.
pub mod cache;
/// Trace loading and replay.
pub mod sim;
/// Hit/miss statistics and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Cache model hosting the policy; construct with `LlcCache::new`.
pub use crate::cache::LlcCache;
/// The replacement policy.
pub use crate::cache::policies::{LlcAccess, LlcReplacementPolicy, ShipRripPolicy};
