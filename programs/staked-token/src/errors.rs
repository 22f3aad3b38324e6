use anchor_lang::prelude::*;

#[error_code]
pub enum StakedTokenError {
    #[msg("Caller is not the owner")]
    NotOwner,
    #[msg("Address is the zero address")]
    ZeroAddress,
    #[msg("Token is already initialized")]
    AlreadyInitialized,
    #[msg("Caller is not a minter")]
    NotMinter,
    #[msg("Amount is zero")]
    ZeroAmount,
    #[msg("Mint amount exceeds minter allowance")]
    MintExceedsMinterAllowance,
    #[msg("Destination is not owned by the recipient")]
    RecipientMismatch,
    #[msg("Mint does not match the token's mint")]
    MintMismatch,
    #[msg("Caller is not the oracle")]
    NotOracle,
    #[msg("Oracle is unchanged")]
    OracleUnchanged,
    #[msg("Exchange rate must be greater than 0")]
    ZeroExchangeRate,
    #[msg("ProgramMismatch")]
    ProgramMismatch,
    #[msg("Math Overflow")]
    MathOverflow,
}
