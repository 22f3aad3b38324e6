use anchor_lang::prelude::*;

use crate::{
    constants::{EXCHANGE_RATE_UPDATER_SEED, MINT_FORWARDER_SEED},
    errors::ForwarderError,
};

/// ForwarderState account - one per forwarder instance, bound to a single token contract
#[account]
#[derive(InitSpace)]
pub struct ForwarderState {
    // The principal allowed to configure and remove callers
    pub owner: Pubkey,

    // The token program this forwarder relays to, immutable once set
    pub token_contract: Pubkey,

    // The privileged operation this forwarder gates
    pub kind: ForwarderKind,

    // Set exactly once by `initialize`
    pub initialized: bool,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AnchorDeserialize, AnchorSerialize, InitSpace)]
pub enum ForwarderKind {
    Mint,
    ExchangeRate,
}

impl ForwarderKind {
    pub const fn seed(&self) -> &'static [u8] {
        match self {
            ForwarderKind::Mint => MINT_FORWARDER_SEED,
            ForwarderKind::ExchangeRate => EXCHANGE_RATE_UPDATER_SEED,
        }
    }
}

impl ForwarderState {
    /// Single capability check for owner-gated operations
    pub fn check_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, ForwarderError::NotOwner);
        Ok(())
    }

    /// Checks the forwarder has been initialized and gates the given operation kind
    pub fn check_gates(&self, kind: ForwarderKind) -> Result<()> {
        require!(self.initialized, ForwarderError::NotInitialized);
        require!(self.kind == kind, ForwarderError::WrongForwarderKind);
        Ok(())
    }

    /// One-shot binding of the forwarder to its owner and token contract
    /// # Arguments
    /// * `kind` - The operation the forwarder gates
    /// * `owner` - The new owner of the forwarder
    /// * `token_contract` - The token program the forwarder relays to
    /// * `bump` - The PDA bump of the forwarder account
    pub fn initialize(
        &mut self,
        kind: ForwarderKind,
        owner: Pubkey,
        token_contract: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, ForwarderError::AlreadyInitialized);
        require_keys_neq!(owner, Pubkey::default(), ForwarderError::ZeroAddress);
        require_keys_neq!(
            token_contract,
            Pubkey::default(),
            ForwarderError::ZeroAddress
        );

        self.owner = owner;
        self.token_contract = token_contract;
        self.kind = kind;
        self.initialized = true;
        self.bump = bump;

        Ok(())
    }
}
