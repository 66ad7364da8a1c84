//! Configuration for the last-level cache model.
//!
//! This module defines the parameters the host supplies to the replacement
//! policy. It provides:
//! 1. **Defaults:** Baseline host parameters (one core, 2048 sets per core, 64-byte lines).
//! 2. **Structures:** The `Config` document, deserialized from JSON.
//! 3. **Enums:** Policy variant and SHCT sharing scope.
//!
//! Associativity, counter widths, and signature hashing are fixed at build
//! time; see [`crate::common::constants`].

use serde::Deserialize;

use crate::common::constants::{LINE_BYTES, SETS_PER_CORE};
use crate::common::error::ConfigError;

/// Default configuration constants for the host.
mod defaults {
    /// Number of modeled cores.
    pub const NUM_CORES: usize = 1;

    /// Heartbeat reporting is disabled unless requested.
    pub const HEARTBEAT_INTERVAL: u64 = 0;
}

/// Policy variant.
///
/// `ShipRripPlus` is the canonical policy; `ShipRrip` is the baseline it
/// improves on and differs only in aging, hit training, and insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PolicyVariant {
    /// Two-tier bounded aging, hit-time SHCT reinforcement, four-tier insertion.
    #[default]
    #[serde(alias = "SHiP-RRIP+", alias = "Plus")]
    ShipRripPlus,
    /// Unbounded single-step aging, no hit-time training, two-tier insertion.
    #[serde(alias = "SHiP-RRIP", alias = "Baseline")]
    ShipRrip,
}

impl PolicyVariant {
    /// Human-readable policy name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShipRripPlus => "SHiP-RRIP+",
            Self::ShipRrip => "SHiP-RRIP",
        }
    }
}

/// How the signature history counter table is shared between cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ShctScope {
    /// One table trained by every core's accesses.
    #[default]
    Shared,
    /// One independent table per core.
    PerCore,
}

/// Root configuration of the cache model.
///
/// # Examples
///
/// ```
/// use shiprrip_core::config::{Config, PolicyVariant, ShctScope};
///
/// let config = Config::default();
/// assert_eq!(config.num_cores, 1);
/// assert_eq!(config.sets_per_core, 2048);
/// assert_eq!(config.variant, PolicyVariant::ShipRripPlus);
/// assert_eq!(config.shct_scope, ShctScope::Shared);
///
/// let json = r#"{ "num_cores": 4, "variant": "ShipRrip", "shct_scope": "PerCore" }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.total_sets(), 4 * 2048);
/// assert_eq!(config.variant, PolicyVariant::ShipRrip);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of modeled cores; each owns independent replacement records.
    pub num_cores: usize,
    /// Sets contributed per core. Each core's record array spans
    /// `sets_per_core * num_cores` sets.
    pub sets_per_core: usize,
    /// Replacement policy variant.
    pub variant: PolicyVariant,
    /// SHCT sharing between cores.
    pub shct_scope: ShctScope,
    /// Line size of the host tag array, in bytes.
    pub line_bytes: usize,
    /// Accesses between periodic reports during trace replay (0 disables).
    pub heartbeat_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_cores: defaults::NUM_CORES,
            sets_per_core: SETS_PER_CORE,
            variant: PolicyVariant::default(),
            shct_scope: ShctScope::default(),
            line_bytes: LINE_BYTES,
            heartbeat_interval: defaults::HEARTBEAT_INTERVAL,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the parameters describe a cache.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_cores == 0 {
            return Err(ConfigError::NoCores);
        }
        if self.sets_per_core == 0 {
            return Err(ConfigError::NoSets);
        }
        if !self.line_bytes.is_power_of_two() {
            return Err(ConfigError::LineSize(self.line_bytes));
        }
        Ok(())
    }

    /// Number of sets indexed per core (`LLC_SETS`).
    pub const fn total_sets(&self) -> usize {
        self.sets_per_core * self.num_cores
    }
}
