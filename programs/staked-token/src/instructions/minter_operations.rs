use anchor_lang::prelude::*;

use crate::{
    constants::{MINTER_ALLOWANCE_SEED, TOKEN_STATE_SEED},
    events::{MinterConfigured, MinterRemoved},
    state::{MinterAllowance, TokenState},
};

/// Configure a minter with an allowance
/// Requires the signer to be the token owner
#[derive(Accounts)]
#[instruction(minter: Pubkey)]
pub struct ConfigureMinter<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The token owner
    pub owner: Signer<'info>,

    /// The TokenState account
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    /// The MinterAllowance account
    /// # PDA Seeds
    /// - MINTER_ALLOWANCE_SEED
    /// - The minter address
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + MinterAllowance::INIT_SPACE,
        seeds = [MINTER_ALLOWANCE_SEED, minter.as_ref()],
        bump
    )]
    pub minter_allowance: Account<'info, MinterAllowance>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> ConfigureMinter<'info> {
    /// Set the minter's allowance
    /// # Arguments
    /// * `minter` - The minter to configure
    /// * `allowance` - The amount the minter may mint
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn configure_minter(
        &mut self,
        minter: Pubkey,
        allowance: u64,
        bumps: &ConfigureMinterBumps,
    ) -> Result<()> {
        self.token_state.check_owner(&self.owner.key())?;

        self.minter_allowance
            .configure(minter, allowance, bumps.minter_allowance)?;

        emit!(MinterConfigured { minter, allowance });

        Ok(())
    }
}

/// Remove a minter
/// Requires the signer to be the token owner
#[derive(Accounts)]
pub struct RemoveMinter<'info> {
    /// The token owner
    pub owner: Signer<'info>,

    /// The TokenState account
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    /// The MinterAllowance account
    #[account(
        mut,
        seeds = [MINTER_ALLOWANCE_SEED, minter_allowance.minter.as_ref()],
        bump = minter_allowance.bump
    )]
    pub minter_allowance: Account<'info, MinterAllowance>,
}

impl<'info> RemoveMinter<'info> {
    pub fn remove_minter(&mut self) -> Result<()> {
        self.token_state.check_owner(&self.owner.key())?;

        self.minter_allowance.remove();

        emit!(MinterRemoved {
            minter: self.minter_allowance.minter,
        });

        Ok(())
    }
}
