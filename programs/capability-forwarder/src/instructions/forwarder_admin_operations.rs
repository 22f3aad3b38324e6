use anchor_lang::prelude::*;

use crate::{
    constants::FORWARDER_SEED,
    errors::ForwarderError,
    events::{ForwarderInitialized, OwnershipTransferred},
    state::{ForwarderKind, ForwarderState},
};

/// Bind a forwarder to its owner and token contract
/// Requires the signer to be the program upgrade authority
#[derive(Accounts)]
#[instruction(kind: ForwarderKind, owner: Pubkey, token_contract: Pubkey)]
pub struct InitializeForwarder<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The deployer, must be the program upgrade authority
    pub authority: Signer<'info>,

    /// The ForwarderState account
    /// # PDA Seeds
    /// - FORWARDER_SEED
    /// - The forwarder kind seed
    /// - The token contract address
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ForwarderState::INIT_SPACE,
        seeds = [FORWARDER_SEED, kind.seed(), token_contract.as_ref()],
        bump
    )]
    pub forwarder_state: Account<'info, ForwarderState>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The Capability Forwarder program
    #[account(address = crate::ID)]
    pub program: Program<'info, crate::program::CapabilityForwarder>,

    /// The ProgramData account of the Capability Forwarder program
    #[account(
        constraint =
            program_data.upgrade_authority_address == Some(authority.key()) @ ForwarderError::NotOwner
    )]
    pub program_data: Account<'info, ProgramData>,
}

impl<'info> InitializeForwarder<'info> {
    /// Initialize the forwarder, handing ownership from the upgrade authority to `owner`
    /// # Arguments
    /// * `kind` - The operation the forwarder gates
    /// * `owner` - The owner of the forwarder
    /// * `token_contract` - The token program the forwarder relays to
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn initialize(
        &mut self,
        kind: ForwarderKind,
        owner: Pubkey,
        token_contract: Pubkey,
        bumps: &InitializeForwarderBumps,
    ) -> Result<()> {
        // Verify the program data address
        if let Some(program_data_address) = self.program.programdata_address()? {
            require_keys_eq!(
                program_data_address,
                self.program_data.key(),
                ForwarderError::ProgramMismatch
            );
        } else {
            return Err(ForwarderError::ProgramMismatch.into());
        }

        self.forwarder_state
            .initialize(kind, owner, token_contract, bumps.forwarder_state)?;

        emit!(OwnershipTransferred {
            forwarder: self.forwarder_state.key(),
            previous_owner: self.authority.key(),
            new_owner: owner,
        });

        emit!(ForwarderInitialized {
            forwarder: self.forwarder_state.key(),
            kind,
            token_contract,
        });

        Ok(())
    }
}

/// Hand forwarder ownership to a new owner
/// Requires the signer to be the current owner
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// The current owner of the forwarder
    pub owner: Signer<'info>,

    /// The ForwarderState account
    #[account(
        mut,
        seeds = [
            FORWARDER_SEED,
            forwarder_state.kind.seed(),
            forwarder_state.token_contract.as_ref()
        ],
        bump = forwarder_state.bump
    )]
    pub forwarder_state: Account<'info, ForwarderState>,
}

impl<'info> TransferOwnership<'info> {
    /// Transfer ownership of the forwarder
    /// # Arguments
    /// * `new_owner` - The new owner, must not be the zero address
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        self.forwarder_state.check_owner(&self.owner.key())?;
        require_keys_neq!(new_owner, Pubkey::default(), ForwarderError::ZeroAddress);

        let previous_owner = self.forwarder_state.owner;
        self.forwarder_state.owner = new_owner;

        emit!(OwnershipTransferred {
            forwarder: self.forwarder_state.key(),
            previous_owner,
            new_owner,
        });

        Ok(())
    }
}
