use crate::derivation::{self, POOL_SEED, SHARE_SEED};
use crate::errors::ErrorCode;
use crate::events::LiquidityRemoved;
use crate::state::*;
use crate::utils::log_pool_stats;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

/// Amounts paid out by `remove_liquidity`, returned to the caller
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawnAmounts {
    pub amount_x: u64,
    pub amount_y: u64,
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    pub provider: Signer<'info>,

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
        mut,
        seeds = [SHARE_SEED, mint_x.key().as_ref(), mint_y.key().as_ref()],
        bump,
    )]
    pub share_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = share_mint,
        token::authority = provider,
    )]
    pub provider_shares: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_x,
        token::authority = provider,
    )]
    pub provider_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_y,
        token::authority = provider,
    )]
    pub provider_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::new(
            self.reserve_x.amount,
            self.reserve_y.amount,
            self.share_mint.supply,
        )
    }

    fn pay_out(
        &self,
        reserve: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        seeds: &[&[u8]],
        amount: u64,
    ) -> Result<()> {
        let cpi_accounts = Transfer {
            from: reserve.to_account_info(),
            to: to.to_account_info(),
            authority: reserve.to_account_info(),
        };
        let signer = &[seeds];
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        token::transfer(cpi_ctx, amount)
    }
}

pub fn handler(
    ctx: Context<RemoveLiquidity>,
    shares: u64,
    amount_x_min: u64,
    amount_y_min: u64,
) -> Result<WithdrawnAmounts> {
    let accounts = &ctx.accounts;
    let pool = accounts.snapshot();
    let plan = pool.withdraw(shares, accounts.provider_shares.amount, amount_x_min, amount_y_min)?;

    msg!(
        "Burning {} shares for x={} y={}",
        shares,
        plan.amount_x,
        plan.amount_y
    );

    let cpi_accounts = Burn {
        mint: accounts.share_mint.to_account_info(),
        from: accounts.provider_shares.to_account_info(),
        authority: accounts.provider.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(accounts.token_program.to_account_info(), cpi_accounts);
    token::burn(cpi_ctx, shares)?;

    let mint_x = accounts.mint_x.key();
    let mint_y = accounts.mint_y.key();

    let bump_x = [ctx.bumps.reserve_x];
    let seeds_x = derivation::reserve_signer_seeds(&mint_x, &mint_y, &bump_x);
    accounts.pay_out(&accounts.reserve_x, &accounts.provider_x, &seeds_x, plan.amount_x)?;

    let bump_y = [ctx.bumps.reserve_y];
    let seeds_y = derivation::reserve_signer_seeds(&mint_y, &mint_x, &bump_y);
    accounts.pay_out(&accounts.reserve_y, &accounts.provider_y, &seeds_y, plan.amount_y)?;

    log_pool_stats(&plan.after, None);
    emit!(LiquidityRemoved {
        provider: accounts.provider.key(),
        mint_x,
        mint_y,
        amount_x: plan.amount_x,
        amount_y: plan.amount_y,
        shares_burned: shares,
        pool: plan.after,
    });

    Ok(WithdrawnAmounts {
        amount_x: plan.amount_x,
        amount_y: plan.amount_y,
    })
}
