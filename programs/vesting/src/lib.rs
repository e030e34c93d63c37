use anchor_lang::prelude::*;

declare_id!("293iydWiPAPcg8k7rnRtWDKLkCA6G5RhJZvgo6vVifur");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Token Vesting Program
 *
 * Locks a pool of token allocations for named beneficiaries and releases
 * them over time on a per-beneficiary linear schedule with a cliff.
 *
 * Key Features:
 * - One pool per company name, with a program-controlled treasury
 * - Per-beneficiary schedule: start, cliff, end, total amount
 * - Pull-based claims: beneficiaries withdraw whatever has vested
 * - Deferred funding: the treasury may be topped up after allocations exist
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Vesting Account PDA: [company_name], pool metadata and owner
 * - Treasury PDA: ["vesting_treasury", company_name], holds the tokens and
 *   is its own token authority
 * - Employee Account PDAs: ["employee_vesting", beneficiary, vesting_account],
 *   schedule and running withdrawn total
 *
 * Workflow:
 * 1. Owner creates the pool and funds the treasury (mint or transfer to it)
 * 2. Owner creates one allocation per beneficiary
 * 3. Beneficiaries claim as tokens vest
 * 4. Owner closes fully paid allocations, then the pool
 */
#[program]
pub mod vesting {
    use super::*;

    /**
     * Creates a vesting pool and its empty treasury
     *
     * @param company_name - 1..=32 byte label, the pool's derivation seed
     *
     * Access Control: signer becomes the owner
     */
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        handle_create_vesting_account(ctx, company_name)
    }

    /**
     * Creates an allocation for one beneficiary
     *
     * @param start_time - Schedule start (Unix seconds)
     * @param cliff_time - Nothing vests before this
     * @param end_time - Fully vested from this point
     * @param total_amount - Tokens allocated over the whole schedule
     *
     * Access Control: pool owner only
     */
    pub fn create_employee_account(
        ctx: Context<CreateEmployeeAccount>,
        start_time: i64,
        cliff_time: i64,
        end_time: i64,
        total_amount: u64,
    ) -> Result<()> {
        handle_create_employee_account(ctx, start_time, cliff_time, end_time, total_amount)
    }

    /**
     * Claims everything vested and not yet withdrawn
     *
     * @param company_name - Pool name, used to re-derive pool and treasury
     *
     * Access Control: allocation beneficiary only
     */
    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        handle_claim_tokens(ctx, company_name)
    }

    /// Emits the allocation's vested / withdrawn / claimable amounts.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        handle_emit_vesting_quote(ctx)
    }

    /**
     * Closes a fully paid allocation and returns its rent
     *
     * Access Control: pool owner only
     */
    pub fn close_employee_account(ctx: Context<CloseEmployeeAccount>) -> Result<()> {
        handle_close_employee_account(ctx)
    }

    /**
     * Closes a pool with no open allocations
     *
     * Sweeps any residual treasury balance to the owner and closes the
     * treasury and the pool.
     *
     * Access Control: pool owner only
     */
    pub fn close_vesting_account(ctx: Context<CloseVestingAccount>) -> Result<()> {
        handle_close_vesting_account(ctx)
    }

    pub fn initialize(ctx: Context<InitializeVesting>) -> Result<()> {
        handle_initialize(ctx)
    }

    pub fn increment(ctx: Context<Update>) -> Result<()> {
        handle_increment(ctx)
    }

    pub fn decrement(ctx: Context<Update>) -> Result<()> {
        handle_decrement(ctx)
    }

    pub fn set(ctx: Context<Update>, value: u8) -> Result<()> {
        handle_set(ctx, value)
    }

    pub fn close(ctx: Context<CloseVesting>) -> Result<()> {
        handle_close(ctx)
    }
}
