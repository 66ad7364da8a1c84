//! SHiP-RRIP Replacement Policy.
//!
//! Combines Static Re-Reference Interval Prediction with a Signature-based Hit
//! Predictor. Each line carries a 3-bit RRPV; victims are lines predicted to be
//! re-referenced in the distant future (`rrpv == MAX_RRPV`). The SHCT learns,
//! per PC signature, whether lines fetched by that instruction tend to be hit
//! before they are evicted, and chooses the insertion RRPV accordingly.
//!
//! # Variants
//!
//! - `ShipRripPlus` (default): one +1 aging pass, then +2 passes until a
//!   candidate appears; hits also reinforce the line's signature; insertion
//!   RRPV is picked from four confidence tiers.
//! - `ShipRrip`: +1 aging until a candidate appears; hits only promote;
//!   insertion is either MRU or `MAX_RRPV - 1`.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1)
//!   - `select_victim()`: O(W), with at most `MAX_RRPV` aging passes
//! - **Space Complexity:** O(C × S × W) records plus `SHCT_SIZE` counters per table
//! - **Best Case:** Mixed workloads where a few PCs stream and others reuse
//! - **Worst Case:** Heavy signature aliasing between reusing and streaming PCs

use tracing::{debug, trace};

use super::counter;
use super::line::{LineStateTable, ReplacementRecord};
use super::shct::{Shct, Signature};
use super::{LlcAccess, LlcReplacementPolicy};
use crate::cache::CacheBlock;
use crate::common::constants::{LLC_WAYS, MAX_RRPV, THRESHOLD};
use crate::config::{Config, PolicyVariant, ShctScope};
use crate::stats::PolicyStats;

/// Number of +2 passes needed to drive any line from 1 to `MAX_RRPV`.
const STRONG_AGING_PASSES: u8 = MAX_RRPV.div_ceil(2);

/// SHiP-RRIP policy state.
#[derive(Clone, Debug)]
pub struct ShipRripPolicy {
    variant: PolicyVariant,
    scope: ShctScope,
    lines: LineStateTable,
    /// One table when shared, one per core otherwise.
    shct: Vec<Shct>,
    stats: PolicyStats,
}

impl ShipRripPolicy {
    /// Creates a policy sized for `config`, in its initial state.
    ///
    /// Each core gets `config.total_sets()` sets of `LLC_WAYS` records.
    pub fn new(config: &Config) -> Self {
        let tables = match config.shct_scope {
            ShctScope::Shared => 1,
            ShctScope::PerCore => config.num_cores,
        };
        debug!(
            variant = config.variant.name(),
            cores = config.num_cores,
            sets = config.total_sets(),
            ways = LLC_WAYS,
            scope = ?config.shct_scope,
            "replacement policy initialised"
        );
        Self {
            variant: config.variant,
            scope: config.shct_scope,
            lines: LineStateTable::new(config.num_cores, config.total_sets()),
            shct: vec![Shct::new(); tables],
            stats: PolicyStats::default(),
        }
    }

    /// Replacement records.
    pub const fn lines(&self) -> &LineStateTable {
        &self.lines
    }

    /// Mutable replacement records, for hosts that seed state directly.
    pub const fn lines_mut(&mut self) -> &mut LineStateTable {
        &mut self.lines
    }

    /// The SHCT that trains on `core`'s accesses.
    pub fn shct(&self, core: usize) -> &Shct {
        &self.shct[self.table_index(core)]
    }

    /// Mutable SHCT for `core`.
    pub fn shct_mut(&mut self, core: usize) -> &mut Shct {
        let idx = self.table_index(core);
        &mut self.shct[idx]
    }

    #[inline(always)]
    const fn table_index(&self, core: usize) -> usize {
        match self.scope {
            ShctScope::Shared => 0,
            ShctScope::PerCore => core,
        }
    }

    /// Insertion RRPV for a signature whose counter reads `pred`.
    const fn insertion_rrpv(variant: PolicyVariant, pred: u8) -> u8 {
        match variant {
            PolicyVariant::ShipRripPlus => {
                if pred >= THRESHOLD + 2 {
                    0
                } else if pred >= THRESHOLD {
                    1
                } else if pred > 0 {
                    MAX_RRPV - 1
                } else {
                    MAX_RRPV
                }
            }
            PolicyVariant::ShipRrip => {
                if pred >= THRESHOLD {
                    0
                } else {
                    MAX_RRPV - 1
                }
            }
        }
    }

    fn on_hit(&mut self, core: usize, set: usize, way: usize) {
        self.stats.record_hit();
        let variant = self.variant;
        let line = self.lines.line_mut(core, set, way);
        line.reused = true;
        line.rrpv = 0;
        let sig = line.signature;
        if variant == PolicyVariant::ShipRripPlus {
            self.shct_mut(core).reinforce(sig);
        }
    }

    fn on_fill(&mut self, core: usize, set: usize, way: usize, pc: u64) {
        self.stats.record_miss();
        let outgoing = *self.lines.line(core, set, way);
        let sig = Signature::from_pc(pc);
        let variant = self.variant;

        let shct = self.shct_mut(core);
        if outgoing.reused {
            shct.reinforce(outgoing.signature);
        } else {
            shct.penalize(outgoing.signature);
        }
        let pred = shct.lookup(sig);
        let rrpv = Self::insertion_rrpv(variant, pred);
        trace!(core, set, way, signature = %sig, pred, rrpv, "line inserted");

        *self.lines.line_mut(core, set, way) = ReplacementRecord {
            rrpv,
            signature: sig,
            reused: false,
        };
    }
}

/// First way predicted for distant re-reference.
#[inline(always)]
fn find_distant(records: &[ReplacementRecord]) -> Option<usize> {
    records.iter().position(|r| r.rrpv == MAX_RRPV)
}

/// Ages every line of the set by `step`, saturating at `MAX_RRPV`.
#[inline(always)]
fn age(records: &mut [ReplacementRecord], step: u8) {
    for r in records {
        counter::increment_by(&mut r.rrpv, step, MAX_RRPV);
    }
}

/// Find-or-age search: one +1 pass, then +2 passes until a candidate emerges.
fn select_two_tier(records: &mut [ReplacementRecord]) -> Option<usize> {
    if let Some(way) = find_distant(records) {
        return Some(way);
    }
    age(records, 1);
    if let Some(way) = find_distant(records) {
        return Some(way);
    }
    for _ in 0..STRONG_AGING_PASSES {
        age(records, 2);
        if let Some(way) = find_distant(records) {
            return Some(way);
        }
    }
    None
}

/// Classic SRRIP search: +1 passes until a candidate emerges.
fn select_single_tier(records: &mut [ReplacementRecord]) -> Option<usize> {
    for _ in 0..MAX_RRPV {
        if let Some(way) = find_distant(records) {
            return Some(way);
        }
        age(records, 1);
    }
    find_distant(records)
}

impl LlcReplacementPolicy for ShipRripPolicy {
    /// Finds a line at `MAX_RRPV`, aging the set until one exists.
    ///
    /// Ties go to the lowest way. Only aging is performed here; the chosen
    /// line's record is rewritten by `update` once the host installs into it.
    fn select_victim(&mut self, access: &LlcAccess, _set_snapshot: &[CacheBlock]) -> usize {
        let records = self.lines.set_mut(access.core, access.set);
        let found = match self.variant {
            PolicyVariant::ShipRripPlus => select_two_tier(records),
            PolicyVariant::ShipRrip => select_single_tier(records),
        };
        match found {
            Some(way) => {
                trace!(core = access.core, set = access.set, way, "victim selected");
                way
            }
            None => {
                debug!(
                    core = access.core,
                    set = access.set,
                    "no distant line after aging, falling back to way 0"
                );
                0
            }
        }
    }

    /// Promotes and trains on a hit; retires the outgoing line and inserts on a miss.
    fn update(&mut self, access: &LlcAccess, way: usize, _victim_address: u64, hit: bool) {
        if hit {
            self.on_hit(access.core, access.set, way);
        } else {
            self.on_fill(access.core, access.set, way, access.pc);
        }
    }

    fn reset(&mut self) {
        self.lines.reset();
        for table in &mut self.shct {
            table.reset();
        }
        self.stats = PolicyStats::default();
        debug!(variant = self.variant.name(), "replacement policy reset");
    }

    fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    fn report(&self) -> String {
        self.stats.report(self.variant.name())
    }
}
