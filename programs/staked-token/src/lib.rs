#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;

use instructions::*;

declare_id!("CmydtpBghntAppu7zDjLCVmj236e2NN4MSgJcYBo9D1r");

#[program]
pub mod staked_token {
    use super::*;

    /// Initialize the token
    ///
    /// Records the owner and the mint, and creates the oracle store singleton with no oracle
    /// and an exchange rate of 0.
    /// Signer must be the program upgrade authority
    pub fn initialize_token(ctx: Context<InitializeToken>, owner: Pubkey) -> Result<()> {
        ctx.accounts.initialize_token(owner, &ctx.bumps)
    }

    /// Configure a minter with the amount it may mint
    /// Signer must be the token owner
    pub fn configure_minter(
        ctx: Context<ConfigureMinter>,
        minter: Pubkey,
        allowance: u64,
    ) -> Result<()> {
        ctx.accounts
            .configure_minter(minter, allowance, &ctx.bumps)
    }

    /// Remove a minter
    /// Signer must be the token owner
    pub fn remove_minter(ctx: Context<RemoveMinter>) -> Result<()> {
        ctx.accounts.remove_minter()
    }

    /// Mint tokens to `to`
    /// Signer must be a minter with sufficient allowance
    pub fn mint(ctx: Context<MintTokens>, to: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.mint(to, amount)
    }

    /// Replace the oracle allowed to write the exchange rate
    /// Signer must be the token owner
    pub fn update_oracle(ctx: Context<UpdateOracle>, new_oracle: Pubkey) -> Result<()> {
        ctx.accounts.update_oracle(new_oracle)
    }

    /// Write a new exchange rate
    /// Signer must be the oracle
    pub fn update_exchange_rate(ctx: Context<SetExchangeRate>, new_rate: u64) -> Result<()> {
        ctx.accounts.update_exchange_rate(new_rate)
    }

    /// Return the current exchange rate
    pub fn exchange_rate(ctx: Context<ReadExchangeRate>) -> Result<u64> {
        Ok(ctx.accounts.oracle_store.exchange_rate)
    }
}
