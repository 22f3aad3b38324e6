#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;
use state::ForwarderKind;

declare_id!("3QsuRkQG4eL61VSFQbPVmbXp3o3d3o1yvTcQMtPxHkz4");

#[program]
pub mod capability_forwarder {
    use super::*;

    /// Initialize a forwarder bound to a token contract
    ///
    /// Creates the forwarder for the given kind and token program, and hands ownership
    /// from the deployer to `owner`. Can only succeed once per forwarder.
    /// Signer must be the program upgrade authority
    pub fn initialize(
        ctx: Context<InitializeForwarder>,
        kind: ForwarderKind,
        owner: Pubkey,
        token_contract: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize(kind, owner, token_contract, &ctx.bumps)
    }

    /// Transfer forwarder ownership
    /// Signer must be the forwarder owner
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }

    /// Whitelist a caller, granting it a full allowance of `amount` replenished every `interval` seconds
    /// Reconfiguring an existing caller discards its previous allowance
    /// Signer must be the forwarder owner
    pub fn configure_caller(
        ctx: Context<ConfigureCaller>,
        caller: Pubkey,
        amount: u64,
        interval: u64,
    ) -> Result<()> {
        ctx.accounts
            .configure_caller(caller, amount, interval, &ctx.bumps)
    }

    /// Remove a caller from the whitelist
    /// Signer must be the forwarder owner
    pub fn remove_caller(ctx: Context<RemoveCaller>, caller: Pubkey) -> Result<()> {
        ctx.accounts.remove_caller(caller)
    }

    /// Replenish a caller's allowance and return it
    pub fn current_allowance(ctx: Context<CurrentAllowance>, _caller: Pubkey) -> Result<u64> {
        ctx.accounts.current_allowance()
    }

    /// Return the allowance a caller would hold after a replenishment, without mutating it
    pub fn estimated_allowance(ctx: Context<EstimatedAllowance>, _caller: Pubkey) -> Result<u64> {
        ctx.accounts.estimated_allowance()
    }

    /// Mint `amount` tokens to `to` through the bound token contract
    /// Costs `amount` of the caller's allowance
    /// Signer must be a whitelisted caller
    pub fn mint(ctx: Context<ForwardMint>, to: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.mint(to, amount)
    }

    /// Write a new exchange rate to the bound token contract
    /// Costs the absolute difference between the current and new rate
    /// Signer must be a whitelisted caller
    pub fn update_exchange_rate(ctx: Context<ForwardExchangeRate>, new_rate: u64) -> Result<()> {
        ctx.accounts.update_exchange_rate(new_rate)
    }
}
