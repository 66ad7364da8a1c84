//! Fixed Replacement-Policy Parameters.
//!
//! This module defines the build-time constants of the last-level cache model
//! and the SHiP-RRIP policy. It includes:
//! 1. **Geometry:** Associativity and the per-core set count.
//! 2. **RRIP:** Width and maximum of the re-reference prediction value.
//! 3. **SHiP:** Signature history counter table size, counter width, and signature hashing.

/// Associativity of the last-level cache (ways per set).
pub const LLC_WAYS: usize = 16;

/// Sets contributed by each modeled core (`LLC_SETS = SETS_PER_CORE * cores`).
pub const SETS_PER_CORE: usize = 2048;

/// Width of the re-reference prediction value in bits.
pub const RRPV_BITS: u32 = 3;

/// Maximum (distant re-reference) RRPV; lines at this value are eviction candidates.
pub const MAX_RRPV: u8 = (1 << RRPV_BITS) - 1;

/// Number of entries in the signature history counter table. Must be a power of two.
pub const SHCT_SIZE: usize = 1024;

/// Mask reducing a hashed PC to a table index.
pub const SHCT_MASK: u64 = (SHCT_SIZE - 1) as u64;

/// Saturation point of each SHCT counter (3-bit).
pub const SHCT_MAX: u8 = 7;

/// Initial value of every SHCT counter.
pub const SHCT_INIT: u8 = 4;

/// Counter value at or above which a signature is predicted to be reused.
pub const THRESHOLD: u8 = SHCT_INIT;

/// Low PC bits discarded before masking into a signature.
pub const SIGN_SHIFT: u32 = 4;

/// Default cache line size of the host tag array, in bytes.
pub const LINE_BYTES: usize = 64;

const _: () = assert!(SHCT_SIZE.is_power_of_two());
const _: () = assert!(THRESHOLD + 2 <= SHCT_MAX);
