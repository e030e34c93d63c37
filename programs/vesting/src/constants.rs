use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seed labels and bounds shared by the program and by off-chain clients.
 * The seed byte layouts are part of the wire contract: clients derive the
 * same addresses before submitting an instruction, so any change here breaks
 * every existing pool and allocation.
 */

// ===== PDA SEED CONSTANTS =====

/// Seed label for the treasury token account
/// - Used in: ["vesting_treasury", company_name]
/// - The treasury is its own token authority and signs with these seeds
#[constant]
pub const VESTING_TREASURY_SEED: &str = "vesting_treasury";

/// Seed label for employee allocation accounts
/// - Used in: ["employee_vesting", beneficiary, vesting_account]
/// - One allocation per (beneficiary, pool) pair
#[constant]
pub const EMPLOYEE_VESTING_SEED: &str = "employee_vesting";

// The pool account itself is derived from the raw company name bytes only:
// [company_name]

// ===== BOUNDS =====

/// Maximum company name length in bytes
/// - Matches the runtime's per-seed length limit, since the name is a seed
pub const MAX_COMPANY_NAME_LEN: usize = 32;
