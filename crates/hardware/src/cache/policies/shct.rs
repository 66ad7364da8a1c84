//! Signature History Counter Table (SHCT).
//!
//! The SHCT is the learned half of SHiP. Every line remembers the signature of
//! the instruction that brought it in; when the line leaves the cache, the
//! signature's counter moves up if the line was re-referenced and down if it
//! was not. At insertion time the counter of the incoming signature decides
//! how long the new line is expected to live.
//!
//! Signatures alias: many PCs hash onto one entry. That is part of the
//! storage/accuracy trade-off and is kept as is.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for lookup and training
//! - **Space Complexity:** `SHCT_SIZE` 3-bit counters (1024 entries)

use std::fmt;

use super::counter;
use crate::common::constants::{SHCT_INIT, SHCT_MASK, SHCT_MAX, SHCT_SIZE, SIGN_SHIFT};

/// Hashed access-site identifier in `[0, SHCT_SIZE)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(u16);

impl Signature {
    /// Derives the signature of the instruction at `pc`.
    ///
    /// Drops the low `SIGN_SHIFT` bits and masks to the table size.
    #[inline(always)]
    pub const fn from_pc(pc: u64) -> Self {
        Self(((pc >> SIGN_SHIFT) & SHCT_MASK) as u16)
    }

    /// Builds a signature from a raw table index, masking it into range.
    pub const fn from_index(index: usize) -> Self {
        Self((index as u64 & SHCT_MASK) as u16)
    }

    /// Table index of this signature.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

/// Table of per-signature saturating reuse counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shct {
    counters: Vec<u8>,
}

impl Default for Shct {
    fn default() -> Self {
        Self::new()
    }
}

impl Shct {
    /// Creates a table with every counter at `SHCT_INIT`.
    pub fn new() -> Self {
        Self {
            counters: vec![SHCT_INIT; SHCT_SIZE],
        }
    }

    /// Returns every counter to `SHCT_INIT`.
    pub fn reset(&mut self) {
        self.counters.fill(SHCT_INIT);
    }

    /// Current counter value for `sig`.
    #[inline(always)]
    pub fn lookup(&self, sig: Signature) -> u8 {
        self.counters[sig.index()]
    }

    /// Records that a line produced by `sig` was reused.
    #[inline(always)]
    pub fn reinforce(&mut self, sig: Signature) {
        counter::increment(&mut self.counters[sig.index()], SHCT_MAX);
    }

    /// Records that a line produced by `sig` died without reuse.
    #[inline(always)]
    pub fn penalize(&mut self, sig: Signature) {
        counter::decrement(&mut self.counters[sig.index()]);
    }

    /// Overwrites the counter for `sig`, clamped to `SHCT_MAX`.
    ///
    /// Used to seed a table into a known state.
    pub fn set(&mut self, sig: Signature, value: u8) {
        self.counters[sig.index()] = value.min(SHCT_MAX);
    }

    /// All counters, indexed by signature.
    pub fn counters(&self) -> &[u8] {
        &self.counters
    }
}
