use anchor_lang::prelude::*;

use crate::state::PoolSnapshot;

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub fee_basis_points: u16,
}

#[event]
pub struct LiquidityAdded {
    pub provider: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub shares_minted: u64,
    pub pool: PoolSnapshot,
}

#[event]
pub struct LiquidityRemoved {
    pub provider: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub shares_burned: u64,
    pub pool: PoolSnapshot,
}

#[event]
pub struct Swapped {
    pub trader: Pubkey,
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
    pub pool: PoolSnapshot,
}
