use anchor_lang::prelude::*;

/// Event emitted when token ownership changes hands
/// Fields:
/// - previous_owner: The previous owner (the upgrade authority on initialization)
/// - new_owner: The new owner
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Event emitted when a minter is configured
/// Fields:
/// - minter: The minter
/// - allowance: The amount the minter may mint
#[event]
pub struct MinterConfigured {
    pub minter: Pubkey,
    pub allowance: u64,
}

#[event]
pub struct MinterRemoved {
    pub minter: Pubkey,
}

/// Event emitted when tokens are minted
/// Fields:
/// - minter: The minter that minted the tokens
/// - to: The recipient of the tokens
/// - amount: The amount minted
#[event]
pub struct Mint {
    pub minter: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OracleUpdated {
    pub new_oracle: Pubkey,
}

/// Event emitted when the oracle writes a new exchange rate
/// Fields:
/// - oracle: The oracle that wrote the rate
/// - new_exchange_rate: The new exchange rate
#[event]
pub struct ExchangeRateUpdated {
    pub oracle: Pubkey,
    pub new_exchange_rate: u64,
}
