use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[event_cpi]
#[derive(Accounts)]
pub struct CloseVesting<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut, close = owner, has_one = owner @ VestingError::NotOwner)]
    pub vesting: Account<'info, Vesting>,
}

pub fn handle_close(ctx: Context<CloseVesting>) -> Result<()> {
    emit_cpi!(CounterClosed {
        vesting: ctx.accounts.vesting.key(),
        owner: ctx.accounts.owner.key(),
    });
    Ok(())
}
