use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    // Access control errors
    #[msg("Only the vesting account owner can perform this action")]
    NotOwner,
    #[msg("Only the allocation beneficiary can claim")]
    NotBeneficiary,

    // Account address errors
    #[msg("Vesting account address does not match its derivation")]
    VestingAccountMismatch,
    #[msg("Treasury address does not match its derivation")]
    TreasuryMismatch,
    #[msg("Employee account address does not match its derivation")]
    EmployeeAccountMismatch,
    #[msg("Employee account belongs to a different vesting account")]
    WrongVestingAccount,
    #[msg("Token mint does not match the vesting account's mint")]
    TokenMintMismatch,

    // Input validation errors
    #[msg("Company name must not be empty")]
    CompanyNameEmpty,
    #[msg("Company name exceeds 32 bytes")]
    CompanyNameTooLong,
    #[msg("Schedule must satisfy start_time <= cliff_time <= end_time")]
    InvalidSchedule,

    // Lifecycle errors
    #[msg("Allocation still has unwithdrawn tokens")]
    OutstandingAllocation,
    #[msg("Vesting account still has open allocations")]
    OutstandingAllocations,

    // Economic errors
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Insufficient treasury balance for this claim")]
    InsufficientTreasuryBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Withdrawn total would diverge from the vested amount")]
    WithdrawalInvariantViolated,
}
