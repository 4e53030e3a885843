use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::math::{self, MathResult};

/// Reserves and LP supply of one pair, read once per instruction.
///
/// Planning methods never modify `self`; they return the state the pool
/// will be in once the token transfers of the plan have executed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub total_supply: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    XToY,
    YToX,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositPlan {
    pub amount_x: u64,
    pub amount_y: u64,
    pub shares: u64,
    pub after: PoolSnapshot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalPlan {
    pub amount_x: u64,
    pub amount_y: u64,
    pub after: PoolSnapshot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapPlan {
    pub amount_out: u64,
    pub after: PoolSnapshot,
}

impl PoolSnapshot {
    pub fn new(reserve_x: u64, reserve_y: u64, total_supply: u64) -> Self {
        Self {
            reserve_x,
            reserve_y,
            total_supply,
        }
    }

    /// A pool with no outstanding shares has not been seeded yet
    pub fn is_empty(&self) -> bool {
        self.total_supply == 0
    }

    /// Either fully empty or fully seeded
    pub fn is_consistent(&self) -> bool {
        (self.total_supply == 0) == (self.reserve_x == 0 && self.reserve_y == 0)
    }

    /// Reserve product, used to check that swaps never lose value
    pub fn k(&self) -> u128 {
        self.reserve_x as u128 * self.reserve_y as u128
    }

    /// (reserve_in, reserve_out) for a swap direction
    pub fn reserves_for(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Plan a deposit. The first deposit sets the price; later deposits are
    /// trimmed to the current reserve ratio.
    pub fn deposit(
        &self,
        amount_x_desired: u64,
        amount_y_desired: u64,
        amount_x_min: u64,
        amount_y_min: u64,
    ) -> MathResult<DepositPlan> {
        let (amount_x, amount_y) = if self.is_empty() {
            (amount_x_desired, amount_y_desired)
        } else {
            self.optimal_amounts(amount_x_desired, amount_y_desired)?
        };
        if amount_x < amount_x_min || amount_y < amount_y_min {
            msg!(
                "Deposit ({}, {}) below minimum ({}, {})",
                amount_x,
                amount_y,
                amount_x_min,
                amount_y_min
            );
            return Err(ErrorCode::SlippageExceeded);
        }

        // Later deposits mint from the X ratio, capped by the Y ratio so a
        // side that rounds down to nothing never earns shares
        let shares = if self.is_empty() {
            math::initial_shares(amount_x, amount_y)?
        } else {
            let by_x = math::mul_div_floor(self.total_supply, amount_x, self.reserve_x)?;
            let by_y = math::mul_div_floor(self.total_supply, amount_y, self.reserve_y)?;
            by_x.min(by_y)
        };
        if shares == 0 {
            return Err(ErrorCode::DepositTooSmall);
        }

        let after = PoolSnapshot {
            reserve_x: self
                .reserve_x
                .checked_add(amount_x)
                .ok_or(ErrorCode::MathOverflow)?,
            reserve_y: self
                .reserve_y
                .checked_add(amount_y)
                .ok_or(ErrorCode::MathOverflow)?,
            total_supply: self
                .total_supply
                .checked_add(shares)
                .ok_or(ErrorCode::MathOverflow)?,
        };

        Ok(DepositPlan {
            amount_x,
            amount_y,
            shares,
            after,
        })
    }

    fn optimal_amounts(&self, amount_x_desired: u64, amount_y_desired: u64) -> MathResult<(u64, u64)> {
        let amount_y_optimal = math::quote(amount_x_desired, self.reserve_x, self.reserve_y)?;
        if amount_y_optimal <= amount_y_desired {
            return Ok((amount_x_desired, amount_y_optimal));
        }
        let amount_x_optimal = math::quote(amount_y_desired, self.reserve_y, self.reserve_x)?;
        Ok((amount_x_optimal, amount_y_desired))
    }

    /// Plan burning `shares` held by a provider whose LP balance is `held`.
    pub fn withdraw(
        &self,
        shares: u64,
        held: u64,
        amount_x_min: u64,
        amount_y_min: u64,
    ) -> MathResult<WithdrawalPlan> {
        if shares == 0 {
            return Err(ErrorCode::ZeroAmount);
        }
        if shares > held || shares > self.total_supply {
            msg!(
                "Burning {} shares, holding {} of {} outstanding",
                shares,
                held,
                self.total_supply
            );
            return Err(ErrorCode::InsufficientShares);
        }

        let amount_x = math::mul_div_floor(self.reserve_x, shares, self.total_supply)?;
        let amount_y = math::mul_div_floor(self.reserve_y, shares, self.total_supply)?;
        if amount_x < amount_x_min || amount_y < amount_y_min {
            msg!(
                "Withdrawal ({}, {}) below minimum ({}, {})",
                amount_x,
                amount_y,
                amount_x_min,
                amount_y_min
            );
            return Err(ErrorCode::SlippageExceeded);
        }

        Ok(WithdrawalPlan {
            amount_x,
            amount_y,
            after: PoolSnapshot {
                reserve_x: self.reserve_x - amount_x,
                reserve_y: self.reserve_y - amount_y,
                total_supply: self.total_supply - shares,
            },
        })
    }

    /// Plan a swap of `amount_in` in the given direction.
    pub fn swap(
        &self,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
        fee_basis_points: u16,
    ) -> MathResult<SwapPlan> {
        let amount_out = self.quote_swap(direction, amount_in, fee_basis_points)?;
        if amount_out < min_amount_out {
            msg!(
                "Swap output {} below minimum {}",
                amount_out,
                min_amount_out
            );
            return Err(ErrorCode::SlippageExceeded);
        }

        let after = match direction {
            SwapDirection::XToY => PoolSnapshot {
                reserve_x: self
                    .reserve_x
                    .checked_add(amount_in)
                    .ok_or(ErrorCode::MathOverflow)?,
                reserve_y: self.reserve_y - amount_out,
                total_supply: self.total_supply,
            },
            SwapDirection::YToX => PoolSnapshot {
                reserve_x: self.reserve_x - amount_out,
                reserve_y: self
                    .reserve_y
                    .checked_add(amount_in)
                    .ok_or(ErrorCode::MathOverflow)?,
                total_supply: self.total_supply,
            },
        };

        Ok(SwapPlan {
            amount_out,
            after,
        })
    }

    /// Output a swap would produce, without a slippage bound. Unseeded pools,
    /// zero output and outputs that would drain the pool are rejected.
    pub fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: u64,
        fee_basis_points: u16,
    ) -> MathResult<u64> {
        if amount_in == 0 {
            return Err(ErrorCode::ZeroAmount);
        }
        if self.is_empty() {
            return Err(ErrorCode::InsufficientLiquidity);
        }
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        let amount_out = math::amount_out(amount_in, reserve_in, reserve_out, fee_basis_points)?;
        if amount_out == 0 || amount_out >= reserve_out {
            msg!(
                "Swap of {} yields {} against reserve {}",
                amount_in,
                amount_out,
                reserve_out
            );
            return Err(ErrorCode::InsufficientLiquidity);
        }
        Ok(amount_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PoolSnapshot {
        PoolSnapshot::default()
            .deposit(10_000, 500, 10_000, 500)
            .unwrap()
            .after
    }

    #[test]
    fn first_deposit_sets_reserves_and_mints_sqrt() {
        let plan = PoolSnapshot::default()
            .deposit(10_000, 500, 10_000, 500)
            .unwrap();
        assert_eq!(plan.shares, 2236);
        assert_eq!(plan.after, PoolSnapshot::new(10_000, 500, 2236));
        assert!(plan.after.is_consistent());
    }

    #[test]
    fn first_deposit_with_zero_side_fails() {
        assert_eq!(
            PoolSnapshot::default().deposit(10_000, 0, 0, 0),
            Err(ErrorCode::InsufficientInitialLiquidity)
        );
    }

    #[test]
    fn first_deposit_fixes_the_price() {
        // Two first deposits race; whichever applies first sets the ratio and
        // the second is trimmed to it.
        let pool = PoolSnapshot::default().deposit(1_000, 4_000, 0, 0).unwrap().after;
        let second = pool.deposit(1_000, 1_000, 0, 0).unwrap();
        assert_eq!((second.amount_x, second.amount_y), (250, 1_000));
        assert_eq!(second.after.reserve_y * 1_000 / second.after.reserve_x, 4_000);
    }

    #[test]
    fn later_deposit_trims_to_ratio() {
        let plan = seeded().deposit(10_000, 300, 5_000, 300).unwrap();
        assert_eq!((plan.amount_x, plan.amount_y), (6_000, 300));
        assert_eq!(plan.shares, 1341);
        assert_eq!(plan.after, PoolSnapshot::new(16_000, 800, 3577));
    }

    #[test]
    fn later_deposit_uses_y_optimal_when_it_fits() {
        let plan = seeded().deposit(2_000, 1_000, 0, 0).unwrap();
        assert_eq!((plan.amount_x, plan.amount_y), (2_000, 100));
        assert_eq!(plan.shares, 447);
    }

    #[test]
    fn deposit_below_minimum_is_rejected() {
        let pool = seeded();
        assert_eq!(
            pool.deposit(10_000, 300, 7_000, 300),
            Err(ErrorCode::SlippageExceeded)
        );
        assert_eq!(
            pool.deposit(2_000, 1_000, 0, 101),
            Err(ErrorCode::SlippageExceeded)
        );
    }

    #[test]
    fn dust_deposit_is_rejected() {
        let pool = PoolSnapshot::new(1_000_000, 1_000_000, 10);
        assert_eq!(pool.deposit(1, 1, 0, 0), Err(ErrorCode::DepositTooSmall));
    }

    #[test]
    fn withdraw_pays_pro_rata() {
        let plan = seeded().withdraw(1_000, 2236, 1, 1).unwrap();
        assert_eq!((plan.amount_x, plan.amount_y), (4472, 223));
        assert_eq!(plan.after, PoolSnapshot::new(5528, 277, 1236));
    }

    #[test]
    fn withdraw_everything_empties_pool() {
        let plan = seeded().withdraw(2236, 2236, 0, 0).unwrap();
        assert_eq!((plan.amount_x, plan.amount_y), (10_000, 500));
        assert_eq!(plan.after, PoolSnapshot::default());
        assert!(plan.after.is_consistent());
    }

    #[test]
    fn withdraw_more_than_held_fails() {
        let pool = seeded();
        assert_eq!(
            pool.withdraw(1_001, 1_000, 0, 0),
            Err(ErrorCode::InsufficientShares)
        );
        assert_eq!(
            pool.withdraw(3_000, 3_000, 0, 0),
            Err(ErrorCode::InsufficientShares)
        );
        assert_eq!(pool.withdraw(0, 1_000, 0, 0), Err(ErrorCode::ZeroAmount));
        assert_eq!(pool, PoolSnapshot::new(10_000, 500, 2236));
    }

    #[test]
    fn withdraw_below_minimum_fails() {
        assert_eq!(
            seeded().withdraw(1_000, 2236, 4_473, 0),
            Err(ErrorCode::SlippageExceeded)
        );
    }

    #[test]
    fn tiny_swap_yields_nothing() {
        assert_eq!(
            seeded().swap(SwapDirection::XToY, 2, 1, 30),
            Err(ErrorCode::InsufficientLiquidity)
        );
        assert_eq!(
            seeded().swap(SwapDirection::XToY, 2, 0, 30),
            Err(ErrorCode::InsufficientLiquidity)
        );
    }

    #[test]
    fn swap_moves_reserves_and_grows_k() {
        let pool = seeded();
        let plan = pool.swap(SwapDirection::XToY, 1_000, 45, 30).unwrap();
        assert_eq!(plan.amount_out, 45);
        assert_eq!(plan.after, PoolSnapshot::new(11_000, 455, 2236));
        assert!(plan.after.k() >= pool.k());
    }

    #[test]
    fn swap_in_reverse_direction() {
        let pool = seeded();
        let plan = pool.swap(SwapDirection::YToX, 100, 0, 30).unwrap();
        // 100 * 9970 * 10000 / (500 * 10000 + 997000)
        assert_eq!(plan.amount_out, 1662);
        assert_eq!(plan.after, PoolSnapshot::new(8_338, 600, 2236));
        assert!(plan.after.k() >= pool.k());
    }

    #[test]
    fn swap_slippage_leaves_pool_untouched() {
        let pool = seeded();
        assert_eq!(
            pool.swap(SwapDirection::XToY, 1_000, 46, 30),
            Err(ErrorCode::SlippageExceeded)
        );
        assert_eq!(pool, seeded());
    }

    #[test]
    fn swap_against_empty_pool_fails() {
        assert_eq!(
            PoolSnapshot::default().swap(SwapDirection::XToY, 1_000, 0, 30),
            Err(ErrorCode::InsufficientLiquidity)
        );
        assert_eq!(
            seeded().swap(SwapDirection::YToX, 0, 0, 30),
            Err(ErrorCode::ZeroAmount)
        );
    }

    #[test]
    fn donated_reserves_without_shares_cannot_be_swapped() {
        let donated = PoolSnapshot::new(10_000, 500, 0);
        assert_eq!(
            donated.swap(SwapDirection::XToY, 1_000, 0, 30),
            Err(ErrorCode::InsufficientLiquidity)
        );
        assert_eq!(
            donated.quote_swap(SwapDirection::YToX, 100, 30),
            Err(ErrorCode::InsufficientLiquidity)
        );
    }

    #[test]
    fn one_sided_deposit_earns_no_shares() {
        // 10 * 500 / 10000 rounds the Y side down to zero
        let pool = seeded();
        assert_eq!(pool.deposit(10, 1_000, 0, 0), Err(ErrorCode::DepositTooSmall));
        assert_eq!(pool, PoolSnapshot::new(10_000, 500, 2236));
    }

    #[test]
    fn deposit_shares_capped_by_smaller_ratio() {
        // X ratio gives 2236 * 39 / 10000 = 8, Y ratio 2236 * 1 / 500 = 4
        let plan = seeded().deposit(39, 1_000, 0, 0).unwrap();
        assert_eq!((plan.amount_x, plan.amount_y), (39, 1));
        assert_eq!(plan.shares, 4);

        let before = seeded();
        let after = plan.after;
        assert!(
            after.reserve_x as u128 * before.total_supply as u128
                >= before.reserve_x as u128 * after.total_supply as u128
        );
        assert!(
            after.reserve_y as u128 * before.total_supply as u128
                >= before.reserve_y as u128 * after.total_supply as u128
        );
    }
}
