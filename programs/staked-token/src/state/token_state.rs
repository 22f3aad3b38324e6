use anchor_lang::prelude::*;

use crate::errors::StakedTokenError;

/// TokenState account - global configuration of the staked token
#[account]
#[derive(InitSpace)]
pub struct TokenState {
    // The principal allowed to manage minters and the oracle
    pub owner: Pubkey,

    // The Token-2022 mint of the staked token
    pub mint: Pubkey,

    // Set exactly once by `initialize_token`
    pub initialized: bool,

    // Bump of the mint authority PDA
    pub mint_authority_bump: u8,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl TokenState {
    pub fn check_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, StakedTokenError::NotOwner);
        Ok(())
    }

    /// One-shot setup of the token
    /// # Arguments
    /// * `owner` - The owner of the token
    /// * `mint` - The mint, whose authority is the mint authority PDA
    /// * `mint_authority_bump` - The bump of the mint authority PDA
    /// * `bump` - The bump of this account
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        mint_authority_bump: u8,
        bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, StakedTokenError::AlreadyInitialized);
        require_keys_neq!(owner, Pubkey::default(), StakedTokenError::ZeroAddress);

        self.owner = owner;
        self.mint = mint;
        self.initialized = true;
        self.mint_authority_bump = mint_authority_bump;
        self.bump = bump;

        Ok(())
    }
}
