use anchor_lang::prelude::*;

use crate::error::VestingError;

/**
 * Vesting pool account
 *
 * One pool per company name. Holds the metadata needed to authorize
 * allocations and to sign transfers out of the treasury.
 *
 * Derivation: [company_name]
 *
 * Lifecycle:
 * 1. Created by create_vesting_account together with its treasury
 * 2. active_allocations tracks allocations that are not yet closed
 * 3. Closed by close_vesting_account once no allocations remain
 *
 * Layout Notes:
 * - Fields up to treasury_bump are read by indexers in this exact order
 * - bump and active_allocations are appended after them
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VestingAccount {
    /// Identity allowed to create allocations and close the pool
    pub owner: Pubkey,

    /// Mint of the token this pool distributes
    pub mint: Pubkey,

    /// Treasury token account holding undistributed tokens
    /// - Derived from: ["vesting_treasury", company_name]
    /// - Its own token authority, so only this program can move funds
    pub treasury_token_account: Pubkey,

    /// Caller-chosen label, also the pool's derivation seed
    #[max_len(32)]
    pub company_name: String,

    /// Bump of the treasury derivation, used to sign treasury transfers
    pub treasury_bump: u8,

    /// Bump of this account's own derivation
    pub bump: u8,

    /// Number of allocations created and not yet closed
    pub active_allocations: u32,
}

impl VestingAccount {
    /// Discriminator + serialized fields at maximum name length
    pub const LEN: usize = 8 + VestingAccount::INIT_SPACE;

    pub fn register_allocation(&mut self) -> core::result::Result<(), VestingError> {
        self.active_allocations = self
            .active_allocations
            .checked_add(1)
            .ok_or(VestingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_allocation(&mut self) -> core::result::Result<(), VestingError> {
        self.active_allocations = self
            .active_allocations
            .checked_sub(1)
            .ok_or(VestingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// A pool can be closed only after every allocation has been closed.
    pub fn ensure_closable(&self) -> core::result::Result<(), VestingError> {
        if self.active_allocations != 0 {
            return Err(VestingError::OutstandingAllocations);
        }
        Ok(())
    }
}
