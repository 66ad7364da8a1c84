//! Trace replay.
//!
//! Feeds a parsed access trace through an [`LlcCache`] and emits the policy's
//! periodic report while doing so.

/// Trace file loading and parsing.
pub mod trace;

use tracing::info;

use self::trace::TraceAccess;
use crate::cache::LlcCache;

/// Totals of one replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Accesses replayed.
    pub accesses: u64,
    /// Accesses that hit.
    pub hits: u64,
    /// Accesses that missed.
    pub misses: u64,
    /// Misses that evicted a resident line.
    pub evictions: u64,
}

/// Replays `accesses` through `cache`.
///
/// # Arguments
///
/// * `cache` - The cache model; its policy keeps training across calls.
/// * `accesses` - Records to replay, in order.
/// * `heartbeat_interval` - Accesses between heartbeat reports (0 disables).
pub fn run_trace(
    cache: &mut LlcCache,
    accesses: &[TraceAccess],
    heartbeat_interval: u64,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for access in accesses {
        let outcome = cache.access(access.core, access.pc, access.address, access.kind);
        summary.accesses += 1;
        if outcome.hit {
            summary.hits += 1;
        } else {
            summary.misses += 1;
        }
        if outcome.evicted.is_some() {
            summary.evictions += 1;
        }

        if heartbeat_interval != 0 && summary.accesses % heartbeat_interval == 0 {
            info!(
                accesses = summary.accesses,
                "heartbeat\n{}",
                cache.policy().report_heartbeat()
            );
        }
    }
    summary
}
