use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/// Read-only: anyone may request a quote for any allocation.
#[event_cpi]
#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    pub employee_account: Account<'info, EmployeeAccount>,
}

pub fn handle_emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let employee_account = &ctx.accounts.employee_account;

    let vested = employee_account.vested_amount(now)?;
    let claimable = employee_account.claimable_amount(now)?;

    emit_cpi!(VestingQuote {
        employee_account: employee_account.key(),
        beneficiary: employee_account.beneficiary,
        vested,
        total_withdrawn: employee_account.total_withdrawn,
        claimable,
        quoted_at: now,
    });

    Ok(())
}
