use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::pda::treasury_signer_seeds;
use crate::state::*;
use crate::utils::{plan_claim, transfer_from_treasury, verify_claim_accounts, ClaimAccounts};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for claiming vested tokens
 *
 * Moves everything vested but not yet withdrawn from the pool treasury to
 * the beneficiary's associated token account. The receiving account must
 * already exist; this instruction never creates it.
 *
 * Access Control: allocation beneficiary only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimTokens<'info> {
    /// Beneficiary of the allocation
    pub beneficiary: Signer<'info>,

    /// The allocation being claimed against
    /// - Derived from: ["employee_vesting", beneficiary, vesting_account]
    /// - total_withdrawn is updated
    #[account(
        mut,
        has_one = beneficiary @ VestingError::NotBeneficiary,
        has_one = vesting_account @ VestingError::WrongVestingAccount,
        seeds = [
            EMPLOYEE_VESTING_SEED.as_bytes(),
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    /// The pool, derived from: [company_name]
    #[account(
        has_one = treasury_token_account @ VestingError::TreasuryMismatch,
        has_one = mint @ VestingError::TokenMintMismatch,
        seeds = [company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury holding the pool's undistributed tokens
    /// - Derived from: ["vesting_treasury", company_name]
    #[account(
        mut,
        seeds = [VESTING_TREASURY_SEED.as_bytes(), company_name.as_bytes()],
        bump = vesting_account.treasury_bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Beneficiary's associated token account for the pool's mint
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * Validation Process:
 * 1. Re-derive pool, treasury and allocation addresses
 * 2. Check the signer is the beneficiary
 * 3. Compute vested and claimable amounts at the cluster clock
 * 4. Reject an empty claim or an underfunded treasury
 * 5. Record the withdrawal, then transfer
 */
pub fn handle_claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // ===== VALIDATION PHASE =====

    verify_claim_accounts(&ClaimAccounts {
        program_id: ctx.program_id,
        signer: &ctx.accounts.beneficiary.key(),
        company_name: &company_name,
        vesting_account_key: &ctx.accounts.vesting_account.key(),
        vesting_account: &ctx.accounts.vesting_account,
        employee_account_key: &ctx.accounts.employee_account.key(),
        employee_account: &ctx.accounts.employee_account,
        treasury_key: &ctx.accounts.treasury_token_account.key(),
    })?;

    let plan = plan_claim(
        &ctx.accounts.employee_account,
        now,
        ctx.accounts.treasury_token_account.amount,
    )?;

    // ===== EFFECTS PHASE =====

    let employee_account = &mut ctx.accounts.employee_account;
    let total_withdrawn = employee_account.record_withdrawal(plan.claimable, plan.vested)?;

    // ===== INTERACTIONS PHASE =====

    let bump = [ctx.accounts.vesting_account.treasury_bump];
    let seeds = treasury_signer_seeds(&company_name, &bump);
    let signer = &[&seeds[..]];

    transfer_from_treasury(
        ctx.accounts.treasury_token_account.to_account_info(),
        ctx.accounts.employee_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        plan.claimable,
        ctx.accounts.mint.decimals,
        signer,
    )?;

    emit_cpi!(TokensClaimed {
        vesting_account: ctx.accounts.vesting_account.key(),
        beneficiary: ctx.accounts.beneficiary.key(),
        amount: plan.claimable,
        vested: plan.vested,
        total_withdrawn,
        claimed_at: now,
    });

    Ok(())
}
