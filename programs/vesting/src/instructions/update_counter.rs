use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/// Shared by increment, decrement and set. Owner only.
#[event_cpi]
#[derive(Accounts)]
pub struct Update<'info> {
    pub owner: Signer<'info>,

    #[account(mut, has_one = owner @ VestingError::NotOwner)]
    pub vesting: Account<'info, Vesting>,
}

pub fn handle_increment(ctx: Context<Update>) -> Result<()> {
    let count = ctx.accounts.vesting.increment()?;
    emit_cpi!(CounterUpdated {
        vesting: ctx.accounts.vesting.key(),
        count,
    });
    Ok(())
}

pub fn handle_decrement(ctx: Context<Update>) -> Result<()> {
    let count = ctx.accounts.vesting.decrement()?;
    emit_cpi!(CounterUpdated {
        vesting: ctx.accounts.vesting.key(),
        count,
    });
    Ok(())
}

pub fn handle_set(ctx: Context<Update>, value: u8) -> Result<()> {
    let count = ctx.accounts.vesting.set(value);
    emit_cpi!(CounterUpdated {
        vesting: ctx.accounts.vesting.key(),
        count,
    });
    Ok(())
}
