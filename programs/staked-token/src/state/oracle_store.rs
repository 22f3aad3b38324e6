use anchor_lang::prelude::*;

use crate::{
    constants::ORACLE_STORE_VERSION,
    errors::StakedTokenError,
    events::{ExchangeRateUpdated, OracleUpdated},
};

/// OracleStore account - the exchange rate singleton, stored at the PDA derived from
/// `ORACLE_STORE_SLOT`
#[account]
#[derive(InitSpace)]
pub struct OracleStore {
    // Layout version of this account
    pub version: u8,

    // The principal allowed to write the exchange rate, the zero address when unset
    pub oracle: Pubkey,

    // The current exchange rate, 0 until the oracle first writes it
    pub exchange_rate: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl OracleStore {
    pub fn initialize(&mut self, bump: u8) {
        self.version = ORACLE_STORE_VERSION;
        self.oracle = Pubkey::default();
        self.exchange_rate = 0;
        self.bump = bump;
    }

    /// Replace the oracle
    /// # Arguments
    /// * `new_oracle` - The new oracle, must be set and differ from the current one
    /// # Returns
    /// * `Result<OracleUpdated>` - The event to emit
    pub fn update_oracle(&mut self, new_oracle: Pubkey) -> Result<OracleUpdated> {
        require_keys_neq!(new_oracle, Pubkey::default(), StakedTokenError::ZeroAddress);
        require_keys_neq!(new_oracle, self.oracle, StakedTokenError::OracleUnchanged);

        self.oracle = new_oracle;

        Ok(OracleUpdated { new_oracle })
    }

    /// Write a new exchange rate
    /// # Arguments
    /// * `signer` - The principal writing the rate, must be the oracle
    /// * `new_rate` - The new exchange rate, must be greater than 0
    /// # Returns
    /// * `Result<ExchangeRateUpdated>` - The event to emit
    pub fn update_exchange_rate(
        &mut self,
        signer: &Pubkey,
        new_rate: u64,
    ) -> Result<ExchangeRateUpdated> {
        require_keys_eq!(*signer, self.oracle, StakedTokenError::NotOracle);
        require_gt!(new_rate, 0, StakedTokenError::ZeroExchangeRate);

        self.exchange_rate = new_rate;

        Ok(ExchangeRateUpdated {
            oracle: self.oracle,
            new_exchange_rate: new_rate,
        })
    }
}
