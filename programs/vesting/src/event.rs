use anchor_lang::prelude::*;

/// Event emitted when a vesting pool and its treasury are created
#[event]
pub struct VestingAccountCreated {
    /// The vesting account public key
    pub vesting_account: Pubkey,
    /// Owner allowed to create allocations
    pub owner: Pubkey,
    /// Token mint distributed by this pool
    pub mint: Pubkey,
    /// Treasury token account address
    pub treasury_token_account: Pubkey,
    /// Company name used as the derivation seed
    pub company_name: String,
}

/// Event emitted when an allocation is created for a beneficiary
#[event]
pub struct EmployeeAccountCreated {
    pub vesting_account: Pubkey,
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}

/// Event emitted when a beneficiary claims vested tokens
#[event]
pub struct TokensClaimed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    /// Amount transferred in this transaction
    pub amount: u64,
    /// Vested amount at claim time
    pub vested: u64,
    /// Cumulative amount withdrawn after this claim
    pub total_withdrawn: u64,
    /// Clock timestamp used for the computation
    pub claimed_at: i64,
}

/// Read-only snapshot of an allocation at the current clock
#[event]
pub struct VestingQuote {
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
    pub quoted_at: i64,
}

/// Event emitted when a fully paid allocation is closed
#[event]
pub struct EmployeeAccountClosed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub total_withdrawn: u64,
}

/// Event emitted when a pool is closed and its treasury swept
#[event]
pub struct VestingAccountClosed {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    /// Residual treasury balance returned to the owner
    pub amount_swept: u64,
}

#[event]
pub struct CounterInitialized {
    pub vesting: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct CounterUpdated {
    pub vesting: Pubkey,
    pub count: u8,
}

#[event]
pub struct CounterClosed {
    pub vesting: Pubkey,
    pub owner: Pubkey,
}
