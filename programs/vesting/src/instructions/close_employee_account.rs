use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for closing a fully paid allocation
 *
 * Rent goes back to the pool owner, who paid for the account. The pool's
 * open allocation count is decremented so the pool itself can later close.
 *
 * Access Control: pool owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseEmployeeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ VestingError::NotOwner,
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    /// Allocation to close, rent returned to owner
    /// - Derived from: ["employee_vesting", beneficiary, vesting_account]
    #[account(
        mut,
        close = owner,
        has_one = vesting_account @ VestingError::WrongVestingAccount,
        seeds = [
            EMPLOYEE_VESTING_SEED.as_bytes(),
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,
}

pub fn handle_close_employee_account(ctx: Context<CloseEmployeeAccount>) -> Result<()> {
    let employee_account = &ctx.accounts.employee_account;
    employee_account.ensure_closable()?;

    let vesting_account = &mut ctx.accounts.vesting_account;
    vesting_account.release_allocation()?;

    emit_cpi!(EmployeeAccountClosed {
        vesting_account: vesting_account.key(),
        beneficiary: employee_account.beneficiary,
        total_withdrawn: employee_account.total_withdrawn,
    });

    Ok(())
}
