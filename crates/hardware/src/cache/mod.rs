//! Set-Associative Last-Level Cache Model.
//!
//! This module implements the tag array that hosts the replacement policy. It
//! resolves hits and misses, fills invalid ways first, asks the policy for a
//! victim only when a set is full, and reports every resolved access back to
//! the policy. Data movement and timing are not modeled.
//!
//! Each core indexes its own partition of `Config::total_sets()` sets, which
//! keeps the tag array aligned with the policy's per-core replacement records.

/// Cache replacement policy implementations.
pub mod policies;

use tracing::trace;

use self::policies::{LlcAccess, LlcReplacementPolicy, ShipRripPolicy};
use crate::common::AccessKind;
use crate::common::constants::LLC_WAYS;
use crate::common::error::ConfigError;
use crate::config::Config;

/// Block descriptor: the host's view of one way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheBlock {
    /// Line holds data.
    pub valid: bool,
    /// Line was written since installation.
    pub dirty: bool,
    /// Tag of the resident line.
    pub tag: u64,
    /// Line-aligned address of the resident line.
    pub address: u64,
}

/// Result of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LlcOutcome {
    /// Whether the line was resident.
    pub hit: bool,
    /// Set the address mapped to.
    pub set: usize,
    /// Way that hit or received the fill.
    pub way: usize,
    /// Address of the line evicted to make room, if any.
    pub evicted: Option<u64>,
}

/// Last-level cache tag array driving a replacement policy.
pub struct LlcCache {
    blocks: Vec<CacheBlock>,
    cores: usize,
    sets: usize,
    line_bytes: usize,
    writebacks: u64,
    policy: Box<dyn LlcReplacementPolicy>,
}

impl std::fmt::Debug for LlcCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlcCache")
            .field("cores", &self.cores)
            .field("sets", &self.sets)
            .field("ways", &LLC_WAYS)
            .field("line_bytes", &self.line_bytes)
            .field("writebacks", &self.writebacks)
            .finish_non_exhaustive()
    }
}

impl LlcCache {
    /// Creates a cache with the SHiP-RRIP policy selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::with_policy(config, Box::new(ShipRripPolicy::new(config)))
    }

    /// Creates a cache driving an arbitrary policy.
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn with_policy(
        config: &Config,
        policy: Box<dyn LlcReplacementPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let sets = config.total_sets();
        Ok(Self {
            blocks: vec![CacheBlock::default(); config.num_cores * sets * LLC_WAYS],
            cores: config.num_cores,
            sets,
            line_bytes: config.line_bytes,
            writebacks: 0,
            policy,
        })
    }

    /// Number of sets per core.
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Number of cores.
    pub const fn cores(&self) -> usize {
        self.cores
    }

    /// Dirty lines evicted so far.
    pub const fn writebacks(&self) -> u64 {
        self.writebacks
    }

    /// The replacement policy.
    pub fn policy(&self) -> &dyn LlcReplacementPolicy {
        self.policy.as_ref()
    }

    /// Set index of `addr`.
    pub const fn set_index(&self, addr: u64) -> usize {
        ((addr as usize) / self.line_bytes) % self.sets
    }

    const fn tag(&self, addr: u64) -> u64 {
        addr / (self.line_bytes * self.sets) as u64
    }

    const fn base(&self, core: usize, set: usize) -> usize {
        (core * self.sets + set) * LLC_WAYS
    }

    /// Blocks of one set.
    pub fn set_blocks(&self, core: usize, set: usize) -> &[CacheBlock] {
        let base = self.base(core, set);
        &self.blocks[base..base + LLC_WAYS]
    }

    /// Checks if `core`'s partition holds `addr`.
    pub fn contains(&self, core: usize, addr: u64) -> bool {
        let tag = self.tag(addr);
        self.set_blocks(core, self.set_index(addr))
            .iter()
            .any(|b| b.valid && b.tag == tag)
    }

    /// Services one access.
    ///
    /// On a hit the policy is told which way hit. On a miss the line is
    /// installed into the first invalid way, or into the policy's victim when
    /// the set is full, and the policy is told about the fill.
    ///
    /// # Arguments
    ///
    /// * `core` - Requesting core, in `[0, cores)`.
    /// * `pc` - Program counter of the triggering instruction.
    /// * `addr` - Physical address.
    /// * `kind` - Request type.
    pub fn access(&mut self, core: usize, pc: u64, addr: u64, kind: AccessKind) -> LlcOutcome {
        let set = self.set_index(addr);
        let tag = self.tag(addr);
        let base = self.base(core, set);
        let access = LlcAccess {
            core,
            set,
            pc,
            address: addr,
            kind,
        };

        let ways = &mut self.blocks[base..base + LLC_WAYS];
        if let Some(way) = ways.iter().position(|b| b.valid && b.tag == tag) {
            if kind.is_write() {
                ways[way].dirty = true;
            }
            self.policy.update(&access, way, 0, true);
            return LlcOutcome {
                hit: true,
                set,
                way,
                evicted: None,
            };
        }

        let way = match ways.iter().position(|b| !b.valid) {
            Some(way) => way,
            None => self.policy.select_victim(&access, ways),
        };

        let victim = ways[way];
        let evicted = victim.valid.then_some(victim.address);
        if victim.valid && victim.dirty {
            self.writebacks += 1;
        }
        ways[way] = CacheBlock {
            valid: true,
            dirty: kind.is_write(),
            tag,
            address: addr & !(self.line_bytes as u64 - 1),
        };
        trace!(core, set, way, kind = %kind, ?evicted, "line installed");
        self.policy.update(&access, way, evicted.unwrap_or(0), false);

        LlcOutcome {
            hit: false,
            set,
            way,
            evicted,
        }
    }

    /// Invalidates every line and resets the policy.
    pub fn reset(&mut self) {
        self.blocks.fill(CacheBlock::default());
        self.writebacks = 0;
        self.policy.reset();
    }
}
