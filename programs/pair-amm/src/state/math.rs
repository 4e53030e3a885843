//! Integer math for the constant-product pool
//!
//! Every function rounds toward zero. Amounts paid out of the pool are
//! therefore never larger than the exact rational result, which keeps the
//! reserve product non-decreasing.

use crate::errors::ErrorCode;

/// Fees are expressed in basis points, x/10000
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Decimals of every LP share mint
pub const LP_DECIMALS: u8 = 6;

pub type MathResult<T> = core::result::Result<T, ErrorCode>;

/// Floor of `a * b / c` with a 128-bit intermediate.
pub fn mul_div_floor(a: u64, b: u64, c: u64) -> MathResult<u64> {
    if c == 0 {
        return Err(ErrorCode::MathOverflow);
    }
    let result = (a as u128) * (b as u128) / (c as u128);
    u64::try_from(result).map_err(|_| ErrorCode::MathOverflow)
}

/// Integer square root, largest `r` with `r * r <= n`.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Newton's method from an upper bound; the sequence decreases
    // monotonically until it reaches floor(sqrt(n)).
    let mut x = 1u128 << ((128 - n.leading_zeros() + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// LP shares minted by the first deposit into an empty pool
pub fn initial_shares(amount_x: u64, amount_y: u64) -> MathResult<u64> {
    let shares = isqrt(amount_x as u128 * amount_y as u128);
    if shares == 0 {
        return Err(ErrorCode::InsufficientInitialLiquidity);
    }
    // sqrt of a product of two u64 always fits in u64
    u64::try_from(shares).map_err(|_| ErrorCode::MathOverflow)
}

/// Amount of the other asset matching `amount` at the current reserve ratio
pub fn quote(amount: u64, reserve_from: u64, reserve_to: u64) -> MathResult<u64> {
    if reserve_from == 0 || reserve_to == 0 {
        return Err(ErrorCode::InsufficientLiquidity);
    }
    mul_div_floor(amount, reserve_to, reserve_from)
}

/// Constant-product output for `amount_in`, with the fee taken on input.
///
/// `amount_out = floor(in * (10000 - fee) * reserve_out / (reserve_in * 10000 + in * (10000 - fee)))`
///
/// Returns the raw output, which may be zero; callers decide whether a
/// zero output is acceptable.
pub fn amount_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_basis_points: u16,
) -> MathResult<u64> {
    if fee_basis_points as u64 >= BPS_DENOMINATOR {
        return Err(ErrorCode::InvalidFeeRate);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(ErrorCode::InsufficientLiquidity);
    }

    let amount_in_after_fee = (amount_in as u128)
        .checked_mul((BPS_DENOMINATOR - fee_basis_points as u64) as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let numerator = amount_in_after_fee
        .checked_mul(reserve_out as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = (reserve_in as u128)
        .checked_mul(BPS_DENOMINATOR as u128)
        .and_then(|scaled| scaled.checked_add(amount_in_after_fee))
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(numerator / denominator).map_err(|_| ErrorCode::MathOverflow)
}
