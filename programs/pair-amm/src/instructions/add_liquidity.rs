use crate::derivation::{self, POOL_SEED, SHARE_SEED};
use crate::errors::ErrorCode;
use crate::events::LiquidityAdded;
use crate::state::*;
use crate::utils::log_pool_stats;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        seeds = [derivation::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        constraint = mint_x.key() < mint_y.key() @ ErrorCode::MintsNotCanonical
    )]
    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    // Reserve slots, created by the first deposit on the pair
    #[account(
        init_if_needed,
        payer = provider,
        token::mint = mint_x,
        token::authority = reserve_x,
        seeds = [POOL_SEED, mint_x.key().as_ref(), mint_y.key().as_ref()],
        bump
    )]
    pub reserve_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        token::mint = mint_y,
        token::authority = reserve_y,
        seeds = [POOL_SEED, mint_y.key().as_ref(), mint_x.key().as_ref()],
        bump
    )]
    pub reserve_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        mint::decimals = LP_DECIMALS,
        mint::authority = share_mint,
        seeds = [SHARE_SEED, mint_x.key().as_ref(), mint_y.key().as_ref()],
        bump
    )]
    pub share_mint: Box<Account<'info, Mint>>,

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

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = share_mint,
        associated_token::authority = provider,
    )]
    pub provider_shares: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::new(
            self.reserve_x.amount,
            self.reserve_y.amount,
            self.share_mint.supply,
        )
    }

    fn deposit(
        &self,
        from: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        amount: u64,
    ) -> Result<()> {
        let cpi_accounts = Transfer {
            from: from.to_account_info(),
            to: to.to_account_info(),
            authority: self.provider.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token::transfer(cpi_ctx, amount)
    }
}

pub fn handler(
    ctx: Context<AddLiquidity>,
    amount_x_desired: u64,
    amount_y_desired: u64,
    amount_x_min: u64,
    amount_y_min: u64,
) -> Result<u64> {
    let pool = ctx.accounts.snapshot();
    let plan = pool.deposit(amount_x_desired, amount_y_desired, amount_x_min, amount_y_min)?;

    if pool.is_empty() {
        msg!("Seeding new pool");
    }
    msg!(
        "Depositing x={} y={} for {} shares",
        plan.amount_x,
        plan.amount_y,
        plan.shares
    );

    let accounts = &ctx.accounts;
    accounts.deposit(&accounts.provider_x, &accounts.reserve_x, plan.amount_x)?;
    accounts.deposit(&accounts.provider_y, &accounts.reserve_y, plan.amount_y)?;

    let mint_x = accounts.mint_x.key();
    let mint_y = accounts.mint_y.key();
    let bump = [ctx.bumps.share_mint];
    let seeds = derivation::share_mint_signer_seeds(&mint_x, &mint_y, &bump);
    let signer = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: accounts.share_mint.to_account_info(),
        to: accounts.provider_shares.to_account_info(),
        authority: accounts.share_mint.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::mint_to(cpi_ctx, plan.shares)?;

    log_pool_stats(&plan.after, None);
    emit!(LiquidityAdded {
        provider: accounts.provider.key(),
        mint_x,
        mint_y,
        amount_x: plan.amount_x,
        amount_y: plan.amount_y,
        shares_minted: plan.shares,
        pool: plan.after,
    });

    Ok(plan.shares)
}
