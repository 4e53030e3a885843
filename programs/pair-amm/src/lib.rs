#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod derivation;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("5jLeavVY8FSboqC6u9VuqG43bx54xpZNRyzyeYsZF42t");

#[program]
pub mod pair_amm {
    use super::*;

    /// Create the global config. Succeeds once; later calls fail.
    pub fn initialize(ctx: Context<Initialize>, fee_basis_points: u16) -> Result<()> {
        instructions::initialize::handler(ctx, fee_basis_points)
    }

    /// Deposit both assets of a pair, seeding the pool on first use.
    /// Returns the LP shares minted.
    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_x_desired: u64,
        amount_y_desired: u64,
        amount_x_min: u64,
        amount_y_min: u64,
    ) -> Result<u64> {
        instructions::add_liquidity::handler(
            ctx,
            amount_x_desired,
            amount_y_desired,
            amount_x_min,
            amount_y_min,
        )
    }

    /// Burn LP shares for a pro-rata cut of both reserves
    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        shares: u64,
        amount_x_min: u64,
        amount_y_min: u64,
    ) -> Result<WithdrawnAmounts> {
        instructions::remove_liquidity::handler(ctx, shares, amount_x_min, amount_y_min)
    }

    /// Swap `amount_in` of `input_mint` for the other asset of the pair.
    /// Returns the amount paid out.
    pub fn swap(
        ctx: Context<Swap>,
        input_mint: Pubkey,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<u64> {
        instructions::swap::handler(ctx, input_mint, amount_in, min_amount_out)
    }
}
