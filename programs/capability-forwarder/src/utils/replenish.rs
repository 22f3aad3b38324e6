use anchor_lang::prelude::*;

use crate::{errors::ForwarderError, utils::mul_div_floor};

/// Calculate the allowance a caller holds after replenishing for the elapsed time.
/// If the elapsed time reaches the interval, the allowance is fully restored.
/// Otherwise, `floor(elapsed * max_allowance / interval)` is added, capped at `max_allowance`.
/// # Arguments
/// * `elapsed` - Seconds since the allowance was last replenished, zero or positive.
/// * `interval` - The window over which `max_allowance` fully replenishes, in seconds.
/// * `allowance` - The allowance currently held.
/// * `max_allowance` - The upper bound of the allowance.
/// # Returns
/// * `Result<u64>` - The replenished allowance.
#[inline(always)]
pub fn calculate_replenished_allowance(
    elapsed: u64,
    interval: u64,
    allowance: u64,
    max_allowance: u64,
) -> Result<u64> {
    if elapsed >= interval {
        // Full allowance restored
        return Ok(max_allowance);
    }

    // Round down: sub-granularity time is not credited
    let grant = mul_div_floor(elapsed, max_allowance, interval)?;

    let headroom = max_allowance
        .checked_sub(allowance)
        .ok_or(ForwarderError::MathOverflow)?;

    allowance
        .checked_add(grant.min(headroom))
        .ok_or(ForwarderError::MathOverflow.into())
}

/// Seconds elapsed between `last` and `now`.
/// A clock that reads behind `last` counts as no time elapsed.
#[inline(always)]
pub fn elapsed_since(last: i64, now: i64) -> u64 {
    if now <= last {
        0
    } else {
        now.abs_diff(last)
    }
}
