//! Saturating counter helpers.
//!
//! SHCT entries and RRPVs are both small unsigned counters stored at their
//! hardware width. They are never allowed to wrap: increments clamp at a
//! configured maximum and decrements clamp at zero.

/// Increments `counter` by one, saturating at `max`.
#[inline(always)]
pub const fn increment(counter: &mut u8, max: u8) {
    if *counter < max {
        *counter += 1;
    }
}

/// Decrements `counter` by one, saturating at zero.
#[inline(always)]
pub const fn decrement(counter: &mut u8) {
    if *counter > 0 {
        *counter -= 1;
    }
}

/// Adds `step` to `counter`, saturating at `max`.
#[inline(always)]
pub const fn increment_by(counter: &mut u8, step: u8, max: u8) {
    let next = counter.saturating_add(step);
    *counter = if next > max { max } else { next };
}
