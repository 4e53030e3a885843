use crate::derivation::CONFIG_SEED;
use crate::events::ConfigInitialized;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // An existing config must reach the handler, which rejects it
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, fee_basis_points: u16) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;

    config.initialize(authority, fee_basis_points, ctx.bumps.config)?;

    msg!(
        "AMM initialized with {} as authority and {} basis points",
        authority,
        fee_basis_points
    );
    emit!(ConfigInitialized {
        authority,
        fee_basis_points,
    });

    Ok(())
}
