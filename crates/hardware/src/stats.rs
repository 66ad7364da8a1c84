//! Replacement policy statistics.
//!
//! Tracks the two cumulative counters the policy reports at heartbeat and at
//! the end of a run:
//! 1. **Hits:** Accesses that found their line resident.
//! 2. **Misses:** Accesses that installed a new line.

/// Hit/miss counters accumulated by the policy's update path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolicyStats {
    /// Number of hit updates observed.
    pub hits: u64,
    /// Number of miss (install) updates observed.
    pub misses: u64,
}

impl PolicyStats {
    /// Counts one hit.
    #[inline(always)]
    pub const fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts one miss.
    #[inline(always)]
    pub const fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Total accesses observed.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Formats the summary block for the policy named `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiprrip_core::stats::PolicyStats;
    ///
    /// let stats = PolicyStats { hits: 3, misses: 5 };
    /// let text = stats.report("SHiP-RRIP+");
    /// assert!(text.starts_with("=== SHiP-RRIP+ Statistics ==="));
    /// assert!(text.contains("Total Hits    : 3"));
    /// ```
    pub fn report(&self, policy: &str) -> String {
        format!(
            "=== {policy} Statistics ===\n  Total Hits    : {}\n  Total Misses  : {}\n",
            self.hits, self.misses
        )
    }
}
