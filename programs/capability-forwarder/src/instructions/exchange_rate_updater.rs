use anchor_lang::prelude::*;
use anchor_lang::InstructionData;

use crate::{
    constants::{CALLER_ALLOWANCE_SEED, FORWARDER_SEED},
    instructions::gated_forward::{gated_exchange_rate_update, ExchangeRateEndpoint},
    state::{load_caller_allowance, store_caller_allowance, ForwarderKind, ForwarderState},
    utils::{call, static_call},
};

/// Update the token's exchange rate through the forwarder, spending the caller's allowance
/// Requires the signer to be a whitelisted caller of an exchange rate updater
#[derive(Accounts)]
pub struct ForwardExchangeRate<'info> {
    /// The whitelisted caller
    pub caller: Signer<'info>,

    /// The ForwarderState account, signs the update as the token's oracle
    #[account(
        seeds = [
            FORWARDER_SEED,
            forwarder_state.kind.seed(),
            forwarder_state.token_contract.as_ref()
        ],
        bump = forwarder_state.bump
    )]
    pub forwarder_state: Account<'info, ForwarderState>,

    /// The caller's CallerAllowance account
    /// CHECK: May not exist for a caller that was never configured.
    /// Address is verified by the seeds, contents by `load_caller_allowance`
    #[account(
        mut,
        seeds = [
            CALLER_ALLOWANCE_SEED,
            forwarder_state.key().as_ref(),
            caller.key().as_ref()
        ],
        bump
    )]
    pub caller_allowance: UncheckedAccount<'info>,

    /// The bound staked token program
    /// CHECK: Verified against the forwarder's token contract by `ensure_contract`
    pub token_contract: UncheckedAccount<'info>,

    /// The token's oracle store singleton
    /// CHECK: Validated by the token program
    #[account(mut)]
    pub oracle_store: UncheckedAccount<'info>,
}

impl<'info> ForwardExchangeRate<'info> {
    /// Spend the magnitude of the rate change from the caller's allowance and write the new rate
    /// # Arguments
    /// * `new_rate` - The exchange rate to write, must differ from the current rate
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn update_exchange_rate(&self, new_rate: u64) -> Result<()> {
        self.forwarder_state
            .check_gates(ForwarderKind::ExchangeRate)?;

        let mut record = load_caller_allowance(&self.caller_allowance)?.unwrap_or_default();
        let allowance_info = self.caller_allowance.to_account_info();

        gated_exchange_rate_update(
            &mut record,
            self,
            new_rate,
            Clock::get()?.unix_timestamp,
            |record| store_caller_allowance(&allowance_info, record),
        )
    }
}

impl<'info> ExchangeRateEndpoint for ForwardExchangeRate<'info> {
    fn exchange_rate(&self) -> Result<u64> {
        let accounts = staked_token::accounts::ReadExchangeRate {
            oracle_store: self.oracle_store.key(),
        };

        static_call(
            &self.token_contract,
            &self.forwarder_state.token_contract,
            staked_token::instruction::ExchangeRate {}.data(),
            accounts.to_account_metas(None),
            &[self.oracle_store.to_account_info()],
        )
    }

    fn forward_exchange_rate(&self, new_rate: u64) -> Result<()> {
        let token_contract = self.forwarder_state.token_contract;
        let bump = self.forwarder_state.bump;

        let accounts = staked_token::accounts::SetExchangeRate {
            oracle: self.forwarder_state.key(),
            oracle_store: self.oracle_store.key(),
        };

        call(
            &self.token_contract,
            &token_contract,
            staked_token::instruction::UpdateExchangeRate { new_rate }.data(),
            accounts.to_account_metas(None),
            &[
                self.forwarder_state.to_account_info(),
                self.oracle_store.to_account_info(),
            ],
            &[&[
                FORWARDER_SEED,
                ForwarderKind::ExchangeRate.seed(),
                token_contract.as_ref(),
                &[bump],
            ]],
        )
    }
}
