//! Reserve-ratio spot pricing.
//!
//! The rate is a fixed-point ratio of the two reserve balances, corrected
//! for each token's decimal scale. All scaling runs in 256-bit integers:
//! reserves are at most 112 bits and each decimals factor at most `10^18`,
//! so the widest intermediate stays well under 2^256 and cannot overflow.
//! Only the final ratio is lowered to an `f64` for display.

use alloy::primitives::U256;
use eyre::{bail, Result};

use crate::utils::constants::PRICE_PRECISION;

/// Units of token1 bought by one unit of token0, derived from pool reserves.
///
/// `decimals0` and `decimals1` are the decimal scales of token0 and token1.
/// The inverse direction is the arithmetic reciprocal of the returned value,
/// not a second computation from reserves.
///
/// # Errors
/// Returns an error when either reserve is zero: an empty pool has no
/// meaningful rate, and dividing through would surface as Infinity or NaN.
/// Also rejects a ratio so lopsided that the fixed-point division rounds to
/// zero, since the reciprocal of a zero rate is not finite either.
pub fn spot_price(reserve0: U256, reserve1: U256, decimals0: u8, decimals1: u8) -> Result<f64> {
    if reserve0.is_zero() || reserve1.is_zero() {
        bail!("pool is empty: reserves are {reserve0} / {reserve1}");
    }

    let numerator = reserve1 * pow10(u32::from(decimals0));
    let denominator = reserve0 * pow10(u32::from(decimals1));

    let scale = pow10(PRICE_PRECISION);
    let scaled_rate = scale * numerator / denominator;
    if scaled_rate.is_zero() {
        bail!("rate underflows to zero at {PRICE_PRECISION} fractional digits");
    }

    Ok(to_f64(scaled_rate)? / to_f64(scale)?)
}

/// `10^exp` as a [`U256`].
fn pow10(exp: u32) -> U256 {
    U256::from(10).pow(U256::from(exp))
}

/// Lowers an unsigned 256-bit integer to the nearest `f64`.
fn to_f64(value: U256) -> Result<f64> {
    Ok(value.to_string().parse()?)
}
