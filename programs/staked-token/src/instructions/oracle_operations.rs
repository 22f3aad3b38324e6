use anchor_lang::prelude::*;

use crate::{
    constants::{ORACLE_STORE_SLOT, TOKEN_STATE_SEED},
    state::{OracleStore, TokenState},
};

/// Replace the oracle
/// Requires the signer to be the token owner
#[derive(Accounts)]
pub struct UpdateOracle<'info> {
    /// The token owner
    pub owner: Signer<'info>,

    /// The TokenState account
    #[account(seeds = [TOKEN_STATE_SEED], bump = token_state.bump)]
    pub token_state: Account<'info, TokenState>,

    /// The OracleStore singleton
    #[account(mut, seeds = [ORACLE_STORE_SLOT.as_ref()], bump = oracle_store.bump)]
    pub oracle_store: Account<'info, OracleStore>,
}

impl<'info> UpdateOracle<'info> {
    pub fn update_oracle(&mut self, new_oracle: Pubkey) -> Result<()> {
        self.token_state.check_owner(&self.owner.key())?;

        let event = self.oracle_store.update_oracle(new_oracle)?;
        emit!(event);

        Ok(())
    }
}

/// Write a new exchange rate
/// Requires the signer to be the oracle
#[derive(Accounts)]
pub struct SetExchangeRate<'info> {
    /// The oracle
    pub oracle: Signer<'info>,

    /// The OracleStore singleton
    #[account(mut, seeds = [ORACLE_STORE_SLOT.as_ref()], bump = oracle_store.bump)]
    pub oracle_store: Account<'info, OracleStore>,
}

impl<'info> SetExchangeRate<'info> {
    pub fn update_exchange_rate(&mut self, new_rate: u64) -> Result<()> {
        let event = self
            .oracle_store
            .update_exchange_rate(&self.oracle.key(), new_rate)?;
        emit!(event);

        Ok(())
    }
}

/// Read the current exchange rate
#[derive(Accounts)]
pub struct ReadExchangeRate<'info> {
    /// The OracleStore singleton
    #[account(seeds = [ORACLE_STORE_SLOT.as_ref()], bump = oracle_store.bump)]
    pub oracle_store: Account<'info, OracleStore>,
}
