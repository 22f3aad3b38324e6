// PDA SEEDS

/// Seed for TokenState PDA
pub const TOKEN_STATE_SEED: &[u8] = b"token_state";
/// Seed for MinterAllowance PDA
pub const MINTER_ALLOWANCE_SEED: &[u8] = b"minter_allowance";
/// Seed for the mint authority PDA
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// keccak256("staked_token.oracle_store.v1"), the seed of the OracleStore PDA.
/// Must not change across program upgrades.
pub const ORACLE_STORE_SLOT: &[u8; 32] = &[
    213, 120, 193, 81, 128, 97, 187, 72, 1, 114, 214, 20, 215, 150, 231, 162, 94, 147, 210, 19,
    100, 157, 214, 74, 220, 220, 225, 31, 115, 231, 75, 105,
];

/// Layout version written to a freshly created OracleStore
pub const ORACLE_STORE_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    /// Namespace of the oracle store singleton. Bump the version to move the store to a new slot.
    const ORACLE_STORE_NAMESPACE: &[u8] = b"staked_token.oracle_store.v1";

    #[test]
    fn test_oracle_store_slot_is_namespace_hash() {
        assert_eq!(
            solana_keccak_hasher::hash(ORACLE_STORE_NAMESPACE).to_bytes(),
            *ORACLE_STORE_SLOT
        );
    }
}
