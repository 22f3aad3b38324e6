use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::{mint_to, MintTo},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{MINTER_ALLOWANCE_SEED, MINT_AUTHORITY_SEED, TOKEN_STATE_SEED},
    errors::StakedTokenError,
    events,
    state::{MinterAllowance, TokenState},
};

/// Mint staked tokens
/// Requires the signer to be a configured minter
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintTokens<'info> {
    /// The minter
    pub minter: Signer<'info>,

    /// The TokenState account
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    /// The minter's MinterAllowance account
    /// # PDA Seeds
    /// - MINTER_ALLOWANCE_SEED
    /// - The minter's address
    #[account(
        mut,
        seeds = [MINTER_ALLOWANCE_SEED, minter.key().as_ref()],
        bump = minter_allowance.bump
    )]
    pub minter_allowance: Account<'info, MinterAllowance>,

    /// The mint authority PDA
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    ///
    /// CHECK: This account is used to verify the mint authority, but does not need to be checked for correctness as it is uninitialized.
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = token_state.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The staked token mint
    #[account(
        mut,
        address = token_state.mint @ StakedTokenError::MintMismatch,
        mint::authority = mint_authority,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The recipient's token account
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
        constraint = destination.owner == to @ StakedTokenError::RecipientMismatch
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> MintTokens<'info> {
    /// Mint `amount` tokens to `to`, spending the minter's allowance
    /// # Arguments
    /// * `to` - The owner of the destination token account
    /// * `amount` - The amount of tokens to mint (must be greater than 0)
    /// # Returns
    /// * `Result<()>` - Ok if tokens are successfully minted, Err otherwise
    pub fn mint(&mut self, to: Pubkey, amount: u64) -> Result<()> {
        self.minter_allowance.spend(amount)?;

        // Mint to the destination account
        // using the mint authority PDA as signer
        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                &[&[MINT_AUTHORITY_SEED, &[self.token_state.mint_authority_bump]]],
            ),
            amount,
        )?;

        emit!(events::Mint {
            minter: self.minter.key(),
            to,
            amount,
        });

        Ok(())
    }
}
