use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::schedule;

/**
 * Employee allocation account
 *
 * One beneficiary's schedule and withdrawal ledger within a pool.
 *
 * Derivation: ["employee_vesting", beneficiary, vesting_account]
 *
 * Lifecycle:
 * 1. Created by the pool owner via create_employee_account
 * 2. total_withdrawn grows with each claim, never past total_amount
 * 3. Closed by the pool owner once fully paid out
 *
 * Full vesting is not stored; it is total_withdrawn == total_amount.
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct EmployeeAccount {
    /// Identity entitled to claim
    pub beneficiary: Pubkey,

    /// Pool this allocation draws from
    pub vesting_account: Pubkey,

    /// Schedule start (Unix seconds)
    pub start_time: i64,

    /// Nothing vests before this timestamp
    pub cliff_time: i64,

    /// Everything is vested at or after this timestamp
    pub end_time: i64,

    /// Tokens allocated over the full schedule
    pub total_amount: u64,

    /// Tokens already paid out
    pub total_withdrawn: u64,

    /// Bump of this account's derivation
    pub bump: u8,
}

impl EmployeeAccount {
    pub const LEN: usize = 8 + EmployeeAccount::INIT_SPACE;

    pub fn vested_amount(&self, now: i64) -> core::result::Result<u64, VestingError> {
        schedule::vested_amount(
            self.start_time,
            self.cliff_time,
            self.end_time,
            self.total_amount,
            now,
        )
    }

    /// Vested minus already withdrawn at `now`.
    pub fn claimable_amount(&self, now: i64) -> core::result::Result<u64, VestingError> {
        let vested = self.vested_amount(now)?;
        vested
            .checked_sub(self.total_withdrawn)
            .ok_or(VestingError::ArithmeticOverflow)
    }

    pub fn is_fully_withdrawn(&self) -> bool {
        self.total_withdrawn == self.total_amount
    }

    /// Adds a payout to the running total.
    ///
    /// The new total must land exactly on `vested`; anything else means the
    /// claim amount was computed against stale state.
    pub fn record_withdrawal(
        &mut self,
        amount: u64,
        vested: u64,
    ) -> core::result::Result<u64, VestingError> {
        let total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VestingError::ArithmeticOverflow)?;
        if total_withdrawn != vested || total_withdrawn > self.total_amount {
            return Err(VestingError::WithdrawalInvariantViolated);
        }
        self.total_withdrawn = total_withdrawn;
        Ok(total_withdrawn)
    }

    pub fn ensure_closable(&self) -> core::result::Result<(), VestingError> {
        if !self.is_fully_withdrawn() {
            return Err(VestingError::OutstandingAllocation);
        }
        Ok(())
    }
}
