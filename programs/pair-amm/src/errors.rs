use anchor_lang::prelude::*;

#[error_code]
#[derive(Eq, PartialEq)]
pub enum ErrorCode {
    #[msg("Global config is already initialized")]
    AlreadyInitialized,

    #[msg("Fee must be below 10000 basis points")]
    InvalidFeeRate,

    #[msg("Initial deposit would mint zero LP shares")]
    InsufficientInitialLiquidity,

    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,

    #[msg("Not enough LP shares")]
    InsufficientShares,

    #[msg("Insufficient liquidity")]
    InsufficientLiquidity,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Deposit is too small to mint any LP shares")]
    DepositTooSmall,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Pair mints must be distinct and passed in ascending order")]
    MintsNotCanonical,

    #[msg("Math overflow")]
    MathOverflow,
}
