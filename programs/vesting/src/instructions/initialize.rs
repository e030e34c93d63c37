use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeVesting<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init, payer = payer, space = Vesting::LEN)]
    pub vesting: Account<'info, Vesting>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<InitializeVesting>) -> Result<()> {
    let vesting = &mut ctx.accounts.vesting;
    vesting.owner = ctx.accounts.payer.key();
    vesting.count = 0;

    emit_cpi!(CounterInitialized {
        vesting: vesting.key(),
        owner: vesting.owner,
    });

    Ok(())
}
