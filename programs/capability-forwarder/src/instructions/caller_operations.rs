use anchor_lang::prelude::*;

use crate::{
    constants::{CALLER_ALLOWANCE_SEED, FORWARDER_SEED},
    errors::ForwarderError,
    events::CallerRemoved,
    state::{load_caller_allowance, store_caller_allowance, CallerAllowance, ForwarderState},
};

/// Whitelist a caller with an allowance of `amount` per `interval` seconds
/// Requires the signer to be the forwarder owner
#[derive(Accounts)]
#[instruction(caller: Pubkey)]
pub struct ConfigureCaller<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The forwarder owner
    pub owner: Signer<'info>,

    /// The ForwarderState account
    #[account(
        seeds = [
            FORWARDER_SEED,
            forwarder_state.kind.seed(),
            forwarder_state.token_contract.as_ref()
        ],
        bump = forwarder_state.bump
    )]
    pub forwarder_state: Account<'info, ForwarderState>,

    /// The CallerAllowance account, created on first configuration
    /// # PDA Seeds
    /// - CALLER_ALLOWANCE_SEED
    /// - The forwarder address
    /// - The caller address
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + CallerAllowance::INIT_SPACE,
        seeds = [CALLER_ALLOWANCE_SEED, forwarder_state.key().as_ref(), caller.as_ref()],
        bump
    )]
    pub caller_allowance: Account<'info, CallerAllowance>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> ConfigureCaller<'info> {
    /// Configure the caller's allowance, replacing any previous policy
    /// # Arguments
    /// * `caller` - The caller to whitelist
    /// * `amount` - The maximum allowance per interval
    /// * `interval` - The replenishment interval in seconds
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn configure_caller(
        &mut self,
        caller: Pubkey,
        amount: u64,
        interval: u64,
        bumps: &ConfigureCallerBumps,
    ) -> Result<()> {
        self.forwarder_state.check_owner(&self.owner.key())?;
        require!(
            self.forwarder_state.initialized,
            ForwarderError::NotInitialized
        );

        let event = self.caller_allowance.configure(
            self.forwarder_state.key(),
            caller,
            amount,
            interval,
            Clock::get()?.unix_timestamp,
            bumps.caller_allowance,
        )?;

        emit!(event);

        Ok(())
    }
}

/// Remove a caller from the whitelist
/// Requires the signer to be the forwarder owner
#[derive(Accounts)]
#[instruction(caller: Pubkey)]
pub struct RemoveCaller<'info> {
    /// The forwarder owner
    pub owner: Signer<'info>,

    /// The ForwarderState account
    #[account(
        seeds = [
            FORWARDER_SEED,
            forwarder_state.kind.seed(),
            forwarder_state.token_contract.as_ref()
        ],
        bump = forwarder_state.bump
    )]
    pub forwarder_state: Account<'info, ForwarderState>,

    /// The CallerAllowance account
    /// CHECK: May not exist for a caller that was never configured.
    /// Address is verified by the seeds, contents by `load_caller_allowance`
    #[account(
        mut,
        seeds = [CALLER_ALLOWANCE_SEED, forwarder_state.key().as_ref(), caller.as_ref()],
        bump
    )]
    pub caller_allowance: UncheckedAccount<'info>,
}

impl<'info> RemoveCaller<'info> {
    /// Zero the caller's allowance policy
    /// Removing a caller that was never configured succeeds and only emits the event
    /// # Arguments
    /// * `caller` - The caller to remove
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn remove_caller(&mut self, caller: Pubkey) -> Result<()> {
        self.forwarder_state.check_owner(&self.owner.key())?;

        if let Some(mut record) = load_caller_allowance(&self.caller_allowance)? {
            record.remove();
            store_caller_allowance(&self.caller_allowance, &record)?;
        }

        emit!(CallerRemoved { caller });

        Ok(())
    }
}
