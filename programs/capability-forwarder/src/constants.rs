// PDA SEEDS

/// Seed for ForwarderState PDA
pub const FORWARDER_SEED: &[u8] = b"forwarder";
/// Seed for CallerAllowance PDA
pub const CALLER_ALLOWANCE_SEED: &[u8] = b"caller_allowance";

/// Forwarder kind seed for mint forwarders
pub const MINT_FORWARDER_SEED: &[u8] = b"mint";
/// Forwarder kind seed for exchange rate updaters
pub const EXCHANGE_RATE_UPDATER_SEED: &[u8] = b"exchange_rate";
