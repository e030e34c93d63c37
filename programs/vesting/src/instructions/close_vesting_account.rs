use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::pda::treasury_signer_seeds;
use crate::state::*;
use crate::utils::{close_treasury, transfer_from_treasury};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for closing a vesting pool
 *
 * Business Logic:
 * - Refused while any allocation is still open, so no beneficiary can be
 *   left holding a claim against a closed treasury
 * - Sweeps any residual treasury balance to the owner
 * - Closes the treasury token account and the pool, rent to owner
 *
 * Access Control: pool owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseVestingAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The pool to close
    #[account(
        mut,
        close = owner,
        has_one = owner @ VestingError::NotOwner,
        has_one = mint @ VestingError::TokenMintMismatch,
        has_one = treasury_token_account @ VestingError::TreasuryMismatch,
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury to empty and close
    /// - Derived from: ["vesting_treasury", company_name]
    #[account(
        mut,
        seeds = [
            VESTING_TREASURY_SEED.as_bytes(),
            vesting_account.company_name.as_bytes()
        ],
        bump = vesting_account.treasury_bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the residual balance
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_close_vesting_account(ctx: Context<CloseVestingAccount>) -> Result<()> {
    ctx.accounts.vesting_account.ensure_closable()?;

    let remaining_balance = ctx.accounts.treasury_token_account.amount;
    let company_name = ctx.accounts.vesting_account.company_name.clone();
    let bump = [ctx.accounts.vesting_account.treasury_bump];
    let seeds = treasury_signer_seeds(&company_name, &bump);
    let signer = &[&seeds[..]];

    if remaining_balance > 0 {
        transfer_from_treasury(
            ctx.accounts.treasury_token_account.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.mint.decimals,
            signer,
        )?;
    }

    close_treasury(
        ctx.accounts.treasury_token_account.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    emit_cpi!(VestingAccountClosed {
        vesting_account: ctx.accounts.vesting_account.key(),
        owner: ctx.accounts.owner.key(),
        amount_swept: remaining_balance,
    });

    // The pool account itself is closed by the `close = owner` constraint.
    Ok(())
}
