use anchor_lang::prelude::*;

use crate::state::{PoolSnapshot, BPS_DENOMINATOR};

/// Format basis points (10000 = 100%) as a percentage string
pub fn format_basis_points(basis_points: u64) -> String {
    let whole = basis_points / 100;
    let fraction = basis_points % 100;
    format!("{}.{:02}%", whole, fraction)
}

/// Spot price of X in units of Y, scaled by 10000
pub fn spot_price_bps(pool: &PoolSnapshot) -> Option<u64> {
    if pool.reserve_x == 0 {
        return None;
    }
    let price = pool.reserve_y as u128 * BPS_DENOMINATOR as u128 / pool.reserve_x as u128;
    u64::try_from(price).ok()
}

/// Log pool statistics
pub fn log_pool_stats(pool: &PoolSnapshot, fee_basis_points: Option<u16>) {
    msg!("Reserves: x={} y={}", pool.reserve_x, pool.reserve_y);
    msg!("LP supply: {}", pool.total_supply);
    match spot_price_bps(pool) {
        Some(price) => msg!("Spot price (y per x, x10000): {}", price),
        None => msg!("Pool is empty"),
    }
    if let Some(fee) = fee_basis_points {
        msg!("Swap fee: {}", format_basis_points(fee as u64));
    }
}
