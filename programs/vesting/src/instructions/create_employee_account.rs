use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::validate_schedule;
use anchor_lang::prelude::*;

/**
 * Account context for creating a beneficiary allocation
 *
 * The treasury balance is not consulted here. Funding may happen after the
 * allocation exists; claims check the balance at transfer time.
 *
 * Access Control: pool owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateEmployeeAccount<'info> {
    /// Pool owner, pays for the allocation account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Identity entitled to claim from the allocation
    /// CHECK: Only the key is recorded; the beneficiary signs at claim time
    pub beneficiary: AccountInfo<'info>,

    /// The pool the allocation draws from
    /// - Updated to count the new allocation
    #[account(
        mut,
        has_one = owner @ VestingError::NotOwner,
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    /// The allocation (PDA)
    /// - Derived from: ["employee_vesting", beneficiary, vesting_account]
    #[account(
        init,
        payer = owner,
        space = EmployeeAccount::LEN,
        seeds = [
            EMPLOYEE_VESTING_SEED.as_bytes(),
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handle_create_employee_account(
    ctx: Context<CreateEmployeeAccount>,
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
) -> Result<()> {
    validate_schedule(start_time, cliff_time, end_time)?;

    let vesting_account = &mut ctx.accounts.vesting_account;
    vesting_account.register_allocation()?;

    let employee_account = &mut ctx.accounts.employee_account;
    employee_account.beneficiary = ctx.accounts.beneficiary.key();
    employee_account.vesting_account = vesting_account.key();
    employee_account.start_time = start_time;
    employee_account.cliff_time = cliff_time;
    employee_account.end_time = end_time;
    employee_account.total_amount = total_amount;
    employee_account.total_withdrawn = 0;
    employee_account.bump = ctx.bumps.employee_account;

    emit_cpi!(EmployeeAccountCreated {
        vesting_account: vesting_account.key(),
        employee_account: employee_account.key(),
        beneficiary: employee_account.beneficiary,
        start_time,
        cliff_time,
        end_time,
        total_amount,
    });

    Ok(())
}
