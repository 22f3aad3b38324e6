use anchor_lang::prelude::*;

use crate::{
    constants::{CALLER_ALLOWANCE_SEED, FORWARDER_SEED},
    state::{load_caller_allowance, store_caller_allowance, ForwarderState},
};

/// Replenish a caller's allowance and return it. Anyone may call this.
#[derive(Accounts)]
#[instruction(caller: Pubkey)]
pub struct CurrentAllowance<'info> {
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

impl<'info> CurrentAllowance<'info> {
    /// # Returns
    /// * `Result<u64>` - The replenished allowance, 0 for an unconfigured caller
    pub fn current_allowance(&mut self) -> Result<u64> {
        let Some(mut record) = load_caller_allowance(&self.caller_allowance)? else {
            return Ok(0);
        };

        if let Some(event) = record.replenish(Clock::get()?.unix_timestamp)? {
            store_caller_allowance(&self.caller_allowance, &record)?;
            emit!(event);
        }

        Ok(record.allowance)
    }
}

/// Read the allowance a caller would hold after a replenishment now
#[derive(Accounts)]
#[instruction(caller: Pubkey)]
pub struct EstimatedAllowance<'info> {
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
        seeds = [CALLER_ALLOWANCE_SEED, forwarder_state.key().as_ref(), caller.as_ref()],
        bump
    )]
    pub caller_allowance: UncheckedAccount<'info>,
}

impl<'info> EstimatedAllowance<'info> {
    /// # Returns
    /// * `Result<u64>` - The estimated allowance, 0 for an unconfigured caller
    pub fn estimated_allowance(&self) -> Result<u64> {
        match load_caller_allowance(&self.caller_allowance)? {
            Some(record) => record.estimated_allowance(Clock::get()?.unix_timestamp),
            None => Ok(0),
        }
    }
}
