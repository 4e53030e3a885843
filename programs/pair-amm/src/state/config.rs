use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::math::BPS_DENOMINATOR;

#[account]
#[derive(Default, InitSpace)]
pub struct GlobalConfig {
    /// Set once by `initialize`, never cleared
    pub is_initialized: bool,

    /// Bump seed for PDA
    pub bump: u8,

    /// Signer that created the config
    pub authority: Pubkey,

    /// Swap fee charged on input, in basis points (10000 = 100%)
    pub fee_basis_points: u16,
}

impl GlobalConfig {
    /// Write the config exactly once. On failure nothing is modified.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        fee_basis_points: u16,
        bump: u8,
    ) -> core::result::Result<(), ErrorCode> {
        if self.is_initialized {
            return Err(ErrorCode::AlreadyInitialized);
        }
        if fee_basis_points as u64 >= BPS_DENOMINATOR {
            return Err(ErrorCode::InvalidFeeRate);
        }

        self.is_initialized = true;
        self.bump = bump;
        self.authority = authority;
        self.fee_basis_points = fee_basis_points;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialize_keeps_first_fee() {
        let first = Pubkey::new_unique();
        let mut config = GlobalConfig::default();
        config.initialize(first, 30, 254).unwrap();

        assert_eq!(
            config.initialize(Pubkey::new_unique(), 100, 253),
            Err(ErrorCode::AlreadyInitialized)
        );
        assert_eq!(config.fee_basis_points, 30);
        assert_eq!(config.authority, first);
        assert_eq!(config.bump, 254);
    }

    #[test]
    fn fee_must_be_below_denominator() {
        let mut config = GlobalConfig::default();
        assert_eq!(
            config.initialize(Pubkey::new_unique(), 10_000, 255),
            Err(ErrorCode::InvalidFeeRate)
        );
        assert!(!config.is_initialized);

        config.initialize(Pubkey::new_unique(), 9_999, 255).unwrap();
        assert_eq!(config.fee_basis_points, 9_999);
    }

    #[test]
    fn zero_fee_is_allowed() {
        let mut config = GlobalConfig::default();
        config.initialize(Pubkey::new_unique(), 0, 255).unwrap();
        assert!(config.is_initialized);
        assert_eq!(config.fee_basis_points, 0);
    }
}
