//! Address derivation for every program-owned account.
//!
//! Seed layouts here are the only place byte seeds are assembled; account
//! constraints, signer seeds and off-chain clients all go through them.

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_TREASURY_SEED};
use crate::error::VestingError;

pub fn vesting_account_seeds(company_name: &str) -> [&[u8]; 1] {
    [company_name.as_bytes()]
}

pub fn treasury_seeds(company_name: &str) -> [&[u8]; 2] {
    [VESTING_TREASURY_SEED.as_bytes(), company_name.as_bytes()]
}

pub fn employee_account_seeds<'a>(
    beneficiary: &'a Pubkey,
    vesting_account: &'a Pubkey,
) -> [&'a [u8]; 3] {
    [
        EMPLOYEE_VESTING_SEED.as_bytes(),
        beneficiary.as_ref(),
        vesting_account.as_ref(),
    ]
}

/// Seeds the treasury signs transfers and closes with.
pub fn treasury_signer_seeds<'a>(company_name: &'a str, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    let [label, name] = treasury_seeds(company_name);
    [label, name, &bump[..]]
}

pub fn derive_vesting_account(program_id: &Pubkey, company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&vesting_account_seeds(company_name), program_id)
}

pub fn derive_treasury(program_id: &Pubkey, company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&treasury_seeds(company_name), program_id)
}

pub fn derive_employee_account(
    program_id: &Pubkey,
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &employee_account_seeds(beneficiary, vesting_account),
        program_id,
    )
}

/// Recreates an address from its seeds and recorded bump and compares it
/// with the address the caller supplied.
fn verify_address(
    program_id: &Pubkey,
    seeds: &[&[u8]],
    bump: u8,
    supplied: &Pubkey,
    mismatch: VestingError,
) -> core::result::Result<(), VestingError> {
    let bump = [bump];
    let mut with_bump: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
    with_bump.extend_from_slice(seeds);
    with_bump.push(&bump);

    match Pubkey::create_program_address(&with_bump, program_id) {
        Ok(expected) if expected == *supplied => Ok(()),
        _ => Err(mismatch),
    }
}

pub fn verify_vesting_account(
    program_id: &Pubkey,
    company_name: &str,
    bump: u8,
    supplied: &Pubkey,
) -> core::result::Result<(), VestingError> {
    verify_address(
        program_id,
        &vesting_account_seeds(company_name),
        bump,
        supplied,
        VestingError::VestingAccountMismatch,
    )
}

pub fn verify_treasury(
    program_id: &Pubkey,
    company_name: &str,
    bump: u8,
    supplied: &Pubkey,
) -> core::result::Result<(), VestingError> {
    verify_address(
        program_id,
        &treasury_seeds(company_name),
        bump,
        supplied,
        VestingError::TreasuryMismatch,
    )
}

pub fn verify_employee_account(
    program_id: &Pubkey,
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
    bump: u8,
    supplied: &Pubkey,
) -> core::result::Result<(), VestingError> {
    verify_address(
        program_id,
        &employee_account_seeds(beneficiary, vesting_account),
        bump,
        supplied,
        VestingError::EmployeeAccountMismatch,
    )
}
