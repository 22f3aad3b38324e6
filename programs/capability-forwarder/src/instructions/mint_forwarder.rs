use anchor_lang::prelude::*;
use anchor_lang::InstructionData;

use crate::{
    constants::{CALLER_ALLOWANCE_SEED, FORWARDER_SEED},
    instructions::gated_forward::{gated_mint, MintEndpoint},
    state::{load_caller_allowance, store_caller_allowance, ForwarderKind, ForwarderState},
    utils::call,
};

/// Mint tokens through the forwarder, spending the caller's allowance
/// Requires the signer to be a whitelisted caller of a mint forwarder
#[derive(Accounts)]
pub struct ForwardMint<'info> {
    /// The whitelisted caller
    pub caller: Signer<'info>,

    /// The ForwarderState account, signs the mint as the token's minter
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

    /// CHECK: Validated by the token program
    pub token_state: UncheckedAccount<'info>,

    /// CHECK: The token's allowance for the forwarder, validated by the token program
    #[account(mut)]
    pub minter_allowance: UncheckedAccount<'info>,

    /// CHECK: Validated by the token program
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: Validated by the token program
    #[account(mut)]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: The recipient's token account, validated by the token program
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    /// CHECK: The SPL token program used by the token program
    pub token_program: UncheckedAccount<'info>,
}

impl<'info> ForwardMint<'info> {
    /// Spend `amount` of the caller's allowance and mint `amount` tokens to `to`
    /// # Arguments
    /// * `to` - The owner of the destination token account
    /// * `amount` - The amount of tokens to mint
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err otherwise
    pub fn mint(&self, to: Pubkey, amount: u64) -> Result<()> {
        self.forwarder_state.check_gates(ForwarderKind::Mint)?;

        let mut record = load_caller_allowance(&self.caller_allowance)?.unwrap_or_default();
        let allowance_info = self.caller_allowance.to_account_info();

        gated_mint(
            &mut record,
            self,
            to,
            amount,
            Clock::get()?.unix_timestamp,
            |record| store_caller_allowance(&allowance_info, record),
        )
    }
}

impl<'info> MintEndpoint for ForwardMint<'info> {
    fn forward_mint(&self, to: Pubkey, amount: u64) -> Result<()> {
        let token_contract = self.forwarder_state.token_contract;
        let bump = self.forwarder_state.bump;

        let accounts = staked_token::accounts::MintTokens {
            minter: self.forwarder_state.key(),
            token_state: self.token_state.key(),
            minter_allowance: self.minter_allowance.key(),
            mint_authority: self.mint_authority.key(),
            mint: self.mint.key(),
            destination: self.destination.key(),
            token_program: self.token_program.key(),
        };

        call(
            &self.token_contract,
            &token_contract,
            staked_token::instruction::Mint { to, amount }.data(),
            accounts.to_account_metas(None),
            &[
                self.forwarder_state.to_account_info(),
                self.token_state.to_account_info(),
                self.minter_allowance.to_account_info(),
                self.mint_authority.to_account_info(),
                self.mint.to_account_info(),
                self.destination.to_account_info(),
                self.token_program.to_account_info(),
            ],
            &[&[
                FORWARDER_SEED,
                ForwarderKind::Mint.seed(),
                token_contract.as_ref(),
                &[bump],
            ]],
        )
    }
}
