use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::{
    constants::{MINT_AUTHORITY_SEED, ORACLE_STORE_SLOT, TOKEN_STATE_SEED},
    errors::StakedTokenError,
    events::OwnershipTransferred,
    state::{OracleStore, TokenState},
};

/// Initialize the token state and the oracle store singleton
/// Requires the signer to be the program upgrade authority
#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The deployer, must be the program upgrade authority
    pub authority: Signer<'info>,

    /// The TokenState account
    /// # PDA Seeds
    /// - TOKEN_STATE_SEED
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + TokenState::INIT_SPACE,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    /// The OracleStore singleton
    /// # PDA Seeds
    /// - ORACLE_STORE_SLOT
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + OracleStore::INIT_SPACE,
        seeds = [ORACLE_STORE_SLOT.as_ref()],
        bump
    )]
    pub oracle_store: Account<'info, OracleStore>,

    /// The mint authority PDA
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    ///
    /// CHECK: This account is used to verify the mint authority, but does not need to be checked for correctness as it is uninitialized.
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The staked token mint, whose authority must already be the mint authority PDA
    #[account(
        mint::authority = mint_authority,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The Staked Token program
    #[account(address = crate::ID)]
    pub program: Program<'info, crate::program::StakedToken>,

    /// The ProgramData account of the Staked Token program
    #[account(
        constraint =
            program_data.upgrade_authority_address == Some(authority.key()) @ StakedTokenError::NotOwner
    )]
    pub program_data: Account<'info, ProgramData>,
}

impl<'info> InitializeToken<'info> {
    /// Initialize the token, handing ownership from the upgrade authority to `owner`
    /// # Arguments
    /// * `owner` - The owner of the token
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn initialize_token(&mut self, owner: Pubkey, bumps: &InitializeTokenBumps) -> Result<()> {
        // Verify the program data address
        if let Some(program_data_address) = self.program.programdata_address()? {
            require_keys_eq!(
                program_data_address,
                self.program_data.key(),
                StakedTokenError::ProgramMismatch
            );
        } else {
            return Err(StakedTokenError::ProgramMismatch.into());
        }

        self.token_state.initialize(
            owner,
            self.mint.key(),
            bumps.mint_authority,
            bumps.token_state,
        )?;
        self.oracle_store.initialize(bumps.oracle_store);

        emit!(OwnershipTransferred {
            previous_owner: self.authority.key(),
            new_owner: owner,
        });

        Ok(())
    }
}
