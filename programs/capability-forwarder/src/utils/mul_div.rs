use anchor_lang::prelude::Result;

use crate::errors::ForwarderError;

/// Computes floor((n0 * n1) / d) with a 128-bit intermediate
/// Returns error if d is 0 or the quotient does not fit in u64
/// # Arguments
/// * `n0` - The first multiplicand
/// * `n1` - The second multiplicand
/// * `d` - The divisor
/// # Returns
/// * `Result<u64>` - The truncated result of (n0 * n1) / d
#[inline(always)]
pub fn mul_div_floor(n0: u64, n1: u64, d: u64) -> Result<u64> {
    if d == 0 {
        return Err(ForwarderError::DivideByZero.into());
    }

    // u64::MAX * u64::MAX fits in u128, the product cannot overflow
    let p = (n0 as u128) * (n1 as u128);

    Ok(u64::try_from(p / d as u128).map_err(|_| ForwarderError::MathOverflow)?)
}
