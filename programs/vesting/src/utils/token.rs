use anchor_lang::prelude::*;
use anchor_spl::token_interface::{close_account, transfer_checked, CloseAccount, TransferChecked};

/// Moves tokens out of a treasury that is its own authority.
///
/// Works for both SPL Token and Token 2022 mints.
pub fn transfer_from_treasury<'a>(
    treasury: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    treasury_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: treasury.clone(),
        mint,
        to,
        authority: treasury,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, treasury_seeds),
        amount,
        decimals,
    )
}

/// Closes an emptied treasury, sending its rent to `destination`.
pub fn close_treasury<'a>(
    treasury: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    treasury_seeds: &[&[&[u8]]],
) -> Result<()> {
    if treasury.get_lamports() == 0 {
        return Ok(());
    }

    close_account(CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: treasury.clone(),
            destination,
            authority: treasury,
        },
        treasury_seeds,
    ))
}
