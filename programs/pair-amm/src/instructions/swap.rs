use crate::derivation::{self, CONFIG_SEED, POOL_SEED, SHARE_SEED};
use crate::errors::ErrorCode;
use crate::events::Swapped;
use crate::state::*;
use crate::utils::log_pool_stats;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        constraint = mint_x.key() < mint_y.key() @ ErrorCode::MintsNotCanonical
    )]
    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [POOL_SEED, mint_x.key().as_ref(), mint_y.key().as_ref()],
        bump,
        token::mint = mint_x,
    )]
    pub reserve_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [POOL_SEED, mint_y.key().as_ref(), mint_x.key().as_ref()],
        bump,
        token::mint = mint_y,
    )]
    pub reserve_y: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [SHARE_SEED, mint_x.key().as_ref(), mint_y.key().as_ref()],
        bump,
    )]
    pub share_mint: Box<Account<'info, Mint>>,

    // Trader accounts, created when the trader has never held the asset
    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = mint_x,
        associated_token::authority = trader,
    )]
    pub trader_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = mint_y,
        associated_token::authority = trader,
    )]
    pub trader_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Swap<'info> {
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::new(
            self.reserve_x.amount,
            self.reserve_y.amount,
            self.share_mint.supply,
        )
    }

    /// Direction of a swap paying in `input_mint`
    pub fn direction(&self, input_mint: &Pubkey) -> Result<SwapDirection> {
        Ok(swap_direction(input_mint, &self.mint_x.key(), &self.mint_y.key())?)
    }
}

pub fn swap_direction(
    input_mint: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
) -> core::result::Result<SwapDirection, ErrorCode> {
    if input_mint == mint_x {
        Ok(SwapDirection::XToY)
    } else if input_mint == mint_y {
        Ok(SwapDirection::YToX)
    } else {
        Err(ErrorCode::InvalidTokenMint)
    }
}

/// (mint held, mint paired against) of the reserve paying out a swap
pub fn payout_reserve_mints(
    direction: SwapDirection,
    mint_x: Pubkey,
    mint_y: Pubkey,
) -> (Pubkey, Pubkey) {
    match direction {
        SwapDirection::XToY => (mint_y, mint_x),
        SwapDirection::YToX => (mint_x, mint_y),
    }
}

pub fn handler(
    ctx: Context<Swap>,
    input_mint: Pubkey,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<u64> {
    let accounts = &ctx.accounts;
    let direction = accounts.direction(&input_mint)?;
    let fee_basis_points = accounts.config.fee_basis_points;

    let pool = accounts.snapshot();
    let plan = pool.swap(direction, amount_in, min_amount_out, fee_basis_points)?;

    let mint_x = accounts.mint_x.key();
    let mint_y = accounts.mint_y.key();

    let (output_mint, paired_mint) = payout_reserve_mints(direction, mint_x, mint_y);
    let (trader_in, reserve_in, reserve_out, trader_out, bump) = match direction {
        SwapDirection::XToY => (
            &accounts.trader_x,
            &accounts.reserve_x,
            &accounts.reserve_y,
            &accounts.trader_y,
            ctx.bumps.reserve_y,
        ),
        SwapDirection::YToX => (
            &accounts.trader_y,
            &accounts.reserve_y,
            &accounts.reserve_x,
            &accounts.trader_x,
            ctx.bumps.reserve_x,
        ),
    };

    // Trader pays in
    let cpi_accounts = Transfer {
        from: trader_in.to_account_info(),
        to: reserve_in.to_account_info(),
        authority: accounts.trader.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program.clone(), cpi_accounts);
    token::transfer(cpi_ctx, amount_in)?;

    // Output reserve signs for itself
    let bump = [bump];
    let seeds = derivation::reserve_signer_seeds(&output_mint, &paired_mint, &bump);
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: reserve_out.to_account_info(),
        to: trader_out.to_account_info(),
        authority: reserve_out.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token::transfer(cpi_ctx, plan.amount_out)?;

    msg!(
        "Swapped {} of {} for {} of {}",
        amount_in,
        input_mint,
        plan.amount_out,
        output_mint
    );
    log_pool_stats(&plan.after, Some(fee_basis_points));
    emit!(Swapped {
        trader: accounts.trader.key(),
        input_mint,
        output_mint,
        amount_in,
        amount_out: plan.amount_out,
        pool: plan.after,
    });

    Ok(plan.amount_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::PoolAddresses;

    fn pair() -> (Pubkey, Pubkey) {
        derivation::canonical_pair(Pubkey::new_unique(), Pubkey::new_unique())
    }

    #[test]
    fn input_mint_picks_direction() {
        let (mint_x, mint_y) = pair();
        assert_eq!(swap_direction(&mint_x, &mint_x, &mint_y), Ok(SwapDirection::XToY));
        assert_eq!(swap_direction(&mint_y, &mint_x, &mint_y), Ok(SwapDirection::YToX));
        assert_eq!(
            swap_direction(&Pubkey::new_unique(), &mint_x, &mint_y),
            Err(ErrorCode::InvalidTokenMint)
        );
    }

    #[test]
    fn payout_seeds_sign_for_output_reserve() {
        let (mint_x, mint_y) = pair();
        let addresses = PoolAddresses::derive(&mint_x, &mint_y, &crate::ID);

        for (direction, expected) in [
            (SwapDirection::XToY, addresses.reserve_y),
            (SwapDirection::YToX, addresses.reserve_x),
        ] {
            let (held, paired) = payout_reserve_mints(direction, mint_x, mint_y);
            let (address, bump) = derivation::reserve_address(&held, &paired, &crate::ID);
            assert_eq!(address, expected);

            let bump = [bump];
            let seeds = derivation::reserve_signer_seeds(&held, &paired, &bump);
            assert_eq!(
                Pubkey::create_program_address(&seeds, &crate::ID).unwrap(),
                expected
            );
        }
    }
}
