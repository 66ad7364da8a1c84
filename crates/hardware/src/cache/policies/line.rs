//! Per-line replacement state.
//!
//! Every (core, set, way) slot carries the RRIP age of its current occupant,
//! the signature that brought the occupant in, and whether the occupant has
//! been hit since then. Slots are never freed; installing a new line simply
//! overwrites the record in place.

use super::shct::Signature;
use crate::common::constants::{LLC_WAYS, MAX_RRPV};

/// Replacement record for one cache line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplacementRecord {
    /// Re-reference prediction value in `[0, MAX_RRPV]`; higher means "evict sooner".
    pub rrpv: u8,
    /// Signature of the access that installed the current occupant.
    pub signature: Signature,
    /// Whether the occupant has been hit since installation.
    pub reused: bool,
}

impl Default for ReplacementRecord {
    fn default() -> Self {
        Self {
            rrpv: MAX_RRPV,
            signature: Signature::default(),
            reused: false,
        }
    }
}

/// Replacement records for every line of every set of every core.
///
/// Cores do not share records; each core indexes its own block of
/// `sets * LLC_WAYS` entries.
#[derive(Clone, Debug)]
pub struct LineStateTable {
    records: Vec<ReplacementRecord>,
    sets: usize,
}

impl LineStateTable {
    /// Creates a table for `cores` cores of `sets` sets each, all lines at `MAX_RRPV`.
    pub fn new(cores: usize, sets: usize) -> Self {
        Self {
            records: vec![ReplacementRecord::default(); cores * sets * LLC_WAYS],
            sets,
        }
    }

    /// Returns every record to its initial state.
    pub fn reset(&mut self) {
        self.records.fill(ReplacementRecord::default());
    }

    #[inline(always)]
    const fn base(&self, core: usize, set: usize) -> usize {
        (core * self.sets + set) * LLC_WAYS
    }

    /// Records of all ways in one set.
    #[inline(always)]
    pub fn set(&self, core: usize, set: usize) -> &[ReplacementRecord] {
        let base = self.base(core, set);
        &self.records[base..base + LLC_WAYS]
    }

    /// Mutable records of all ways in one set.
    #[inline(always)]
    pub fn set_mut(&mut self, core: usize, set: usize) -> &mut [ReplacementRecord] {
        let base = self.base(core, set);
        &mut self.records[base..base + LLC_WAYS]
    }

    /// Record of a single line.
    #[inline(always)]
    pub fn line(&self, core: usize, set: usize, way: usize) -> &ReplacementRecord {
        &self.set(core, set)[way]
    }

    /// Mutable record of a single line.
    #[inline(always)]
    pub fn line_mut(&mut self, core: usize, set: usize, way: usize) -> &mut ReplacementRecord {
        &mut self.set_mut(core, set)[way]
    }
}
