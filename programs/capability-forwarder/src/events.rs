use anchor_lang::prelude::*;

use crate::state::ForwarderKind;

/// Event emitted when forwarder ownership changes hands
/// Fields:
/// - forwarder: The forwarder whose ownership changed
/// - previous_owner: The previous owner (the upgrade authority on initialization)
/// - new_owner: The new owner
#[event]
pub struct OwnershipTransferred {
    pub forwarder: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when a forwarder is bound to its token contract
/// Fields:
/// - forwarder: The forwarder that was initialized
/// - kind: The operation the forwarder gates
/// - token_contract: The token program the forwarder is bound to
#[event]
pub struct ForwarderInitialized {
    pub forwarder: Pubkey,
    pub kind: ForwarderKind,
    pub token_contract: Pubkey,
}

/// Event emitted when a caller is granted an allowance
/// Fields:
/// - caller: The whitelisted caller
/// - amount: The maximum allowance per interval
/// - interval: The replenishment interval in seconds
#[event]
pub struct CallerConfigured {
    pub caller: Pubkey,
    pub amount: u64,
    pub interval: u64,
}

/// Event emitted when a caller is removed from the whitelist
#[event]
pub struct CallerRemoved {
    pub caller: Pubkey,
}

/// Event emitted when a caller's allowance is replenished
/// Fields:
/// - caller: The caller whose allowance was replenished
/// - allowance_increase: The amount added to the allowance
/// - new_allowance: The allowance after replenishment
#[event]
pub struct AllowanceReplenished {
    pub caller: Pubkey,
    pub allowance_increase: u64,
    pub new_allowance: u64,
}

/// Event emitted when a mint is forwarded to the token contract
/// Fields:
/// - minter: The caller that requested the mint
/// - to: The recipient of the minted tokens
/// - amount: The amount minted
#[event]
pub struct Mint {
    pub minter: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Event emitted when an exchange rate update is forwarded to the token contract
/// Fields:
/// - caller: The caller that requested the update
/// - new_exchange_rate: The exchange rate written to the token contract
#[event]
pub struct ExchangeRateUpdated {
    pub caller: Pubkey,
    pub new_exchange_rate: u64,
}
