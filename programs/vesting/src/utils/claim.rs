//! Claim engine: account verification and claim planning.
//!
//! Everything the claim instruction decides before moving tokens lives
//! here, so it can be exercised with fabricated accounts and timestamps.

use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::pda;
use crate::state::{EmployeeAccount, VestingAccount};

/// Addresses and decoded state supplied to a claim.
pub struct ClaimAccounts<'a> {
    pub program_id: &'a Pubkey,
    pub signer: &'a Pubkey,
    pub company_name: &'a str,
    pub vesting_account_key: &'a Pubkey,
    pub vesting_account: &'a VestingAccount,
    pub employee_account_key: &'a Pubkey,
    pub employee_account: &'a EmployeeAccount,
    pub treasury_key: &'a Pubkey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimPlan {
    pub vested: u64,
    pub claimable: u64,
}

/// Re-derives pool, treasury and allocation addresses and checks the
/// signer is the allocation's beneficiary.
pub fn verify_claim_accounts(accounts: &ClaimAccounts) -> Result<(), VestingError> {
    let vesting = accounts.vesting_account;
    let employee = accounts.employee_account;

    if vesting.company_name != accounts.company_name {
        return Err(VestingError::VestingAccountMismatch);
    }
    pda::verify_vesting_account(
        accounts.program_id,
        accounts.company_name,
        vesting.bump,
        accounts.vesting_account_key,
    )?;

    if vesting.treasury_token_account != *accounts.treasury_key {
        return Err(VestingError::TreasuryMismatch);
    }
    pda::verify_treasury(
        accounts.program_id,
        accounts.company_name,
        vesting.treasury_bump,
        accounts.treasury_key,
    )?;

    if employee.vesting_account != *accounts.vesting_account_key {
        return Err(VestingError::WrongVestingAccount);
    }
    pda::verify_employee_account(
        accounts.program_id,
        &employee.beneficiary,
        accounts.vesting_account_key,
        employee.bump,
        accounts.employee_account_key,
    )?;

    if employee.beneficiary != *accounts.signer {
        return Err(VestingError::NotBeneficiary);
    }
    Ok(())
}

/// Works out how much a claim at `now` transfers.
///
/// Fails when nothing is claimable or the treasury cannot cover it.
pub fn plan_claim(
    employee: &EmployeeAccount,
    now: i64,
    treasury_balance: u64,
) -> Result<ClaimPlan, VestingError> {
    let vested = employee.vested_amount(now)?;
    let claimable = vested
        .checked_sub(employee.total_withdrawn)
        .ok_or(VestingError::ArithmeticOverflow)?;

    if claimable == 0 {
        return Err(VestingError::NothingToClaim);
    }
    if treasury_balance < claimable {
        return Err(VestingError::InsufficientTreasuryBalance);
    }

    Ok(ClaimPlan { vested, claimable })
}
