//! Last-Level Cache Replacement Policies.
//!
//! Implements victim selection and per-access state training for the
//! last-level cache.
//!
//! # Policies
//!
//! - `ShipRripPolicy`: RRIP aging driven by a signature-based hit predictor,
//!   in its improved (`ShipRripPlus`) and baseline (`ShipRrip`) variants.

/// Saturating counter helpers.
pub mod counter;

/// Per-line replacement records.
pub mod line;

/// Signature history counter table.
pub mod shct;

/// SHiP-RRIP replacement policy.
pub mod ship;

pub use line::{LineStateTable, ReplacementRecord};
pub use shct::{Shct, Signature};
pub use ship::ShipRripPolicy;

use super::CacheBlock;
use crate::common::AccessKind;
use crate::stats::PolicyStats;

/// The access the host is servicing when it calls into the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LlcAccess {
    /// Requesting core.
    pub core: usize,
    /// Target set index.
    pub set: usize,
    /// Program counter of the triggering instruction.
    pub pc: u64,
    /// Physical address of the request.
    pub address: u64,
    /// Request type.
    pub kind: AccessKind,
}

/// Trait for last-level cache replacement policies.
///
/// The host calls [`select_victim`](Self::select_victim) when a set is full and
/// a line must be installed, then calls [`update`](Self::update) once the access
/// has been resolved (hit, or miss installed into the chosen way).
pub trait LlcReplacementPolicy: Send + Sync {
    /// Selects the way to evict from `access.set`.
    ///
    /// # Arguments
    ///
    /// * `access` - The access that needs a line installed.
    /// * `set_snapshot` - The host's view of the set's blocks.
    ///
    /// # Returns
    ///
    /// A way index in `[0, LLC_WAYS)`.
    fn select_victim(&mut self, access: &LlcAccess, set_snapshot: &[CacheBlock]) -> usize;

    /// Trains the policy on a resolved access.
    ///
    /// # Arguments
    ///
    /// * `access` - The access that was serviced.
    /// * `way` - The way that hit, or the way the miss was installed into.
    /// * `victim_address` - Address of the evicted line (0 if none).
    /// * `hit` - Whether the access hit.
    fn update(&mut self, access: &LlcAccess, way: usize, victim_address: u64, hit: bool);

    /// Returns every piece of state to its initial value.
    fn reset(&mut self);

    /// Cumulative hit and miss counts.
    fn stats(&self) -> &PolicyStats;

    /// End-of-run summary.
    fn report(&self) -> String;

    /// Periodic summary emitted during a run.
    fn report_heartbeat(&self) -> String {
        self.report()
    }
}
