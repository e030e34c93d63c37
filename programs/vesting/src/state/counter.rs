use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Demonstration counter kept alongside the vesting ledger.
///
/// Keypair-addressed. Every mutation requires the owner's signature; a
/// closed account fails deserialization before any handler runs.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Vesting {
    pub owner: Pubkey,
    pub count: u8,
}

impl Vesting {
    pub const LEN: usize = 8 + Vesting::INIT_SPACE;

    pub fn increment(&mut self) -> core::result::Result<u8, VestingError> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(VestingError::ArithmeticOverflow)?;
        Ok(self.count)
    }

    pub fn decrement(&mut self) -> core::result::Result<u8, VestingError> {
        self.count = self
            .count
            .checked_sub(1)
            .ok_or(VestingError::ArithmeticOverflow)?;
        Ok(self.count)
    }

    pub fn set(&mut self, value: u8) -> u8 {
        self.count = value;
        self.count
    }
}
