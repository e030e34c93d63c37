use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::validate_company_name;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a vesting pool
 *
 * - Creates the pool PDA derived from the raw company name bytes
 * - Creates an empty treasury token account for `mint`, derived from
 *   ["vesting_treasury", company_name] and set as its own authority
 * - Fails if either account already exists
 *
 * Access Control: the signer becomes the pool owner
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    /// Future owner of the pool, pays for both accounts
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The vesting pool (PDA)
    /// - Derived from: [company_name]
    #[account(
        init,
        payer = signer,
        space = VestingAccount::LEN,
        seeds = [company_name.as_bytes()],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    /// Mint of the token the pool distributes
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury token account (PDA)
    /// - Derived from: ["vesting_treasury", company_name]
    /// - Token authority is the treasury itself, never the owner
    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = treasury_token_account,
        token::token_program = token_program,
        seeds = [VESTING_TREASURY_SEED.as_bytes(), company_name.as_bytes()],
        bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_create_vesting_account(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    // Names over 32 bytes already abort in seed derivation; this also
    // rejects the empty name.
    validate_company_name(&company_name)?;

    let vesting_account = &mut ctx.accounts.vesting_account;
    vesting_account.owner = ctx.accounts.signer.key();
    vesting_account.mint = ctx.accounts.mint.key();
    vesting_account.treasury_token_account = ctx.accounts.treasury_token_account.key();
    vesting_account.company_name = company_name;
    vesting_account.treasury_bump = ctx.bumps.treasury_token_account;
    vesting_account.bump = ctx.bumps.vesting_account;
    vesting_account.active_allocations = 0;

    emit_cpi!(VestingAccountCreated {
        vesting_account: vesting_account.key(),
        owner: vesting_account.owner,
        mint: vesting_account.mint,
        treasury_token_account: vesting_account.treasury_token_account,
        company_name: vesting_account.company_name.clone(),
    });

    Ok(())
}
