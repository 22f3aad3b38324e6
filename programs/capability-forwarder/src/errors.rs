use anchor_lang::prelude::*;

#[error_code]
pub enum ForwarderError {
    #[msg("Caller is not the owner")]
    NotOwner,
    #[msg("Address is the zero address")]
    ZeroAddress,
    #[msg("Forwarder is already initialized")]
    AlreadyInitialized,
    #[msg("Forwarder is not initialized")]
    NotInitialized,
    #[msg("Caller is not whitelisted")]
    CallerNotWhitelisted,
    #[msg("Amount is zero")]
    ZeroAmount,
    #[msg("Interval is zero")]
    ZeroInterval,
    #[msg("Amount exceeds caller allowance")]
    AllowanceExceeded,
    #[msg("New exchange rate must be greater than 0")]
    RateZero,
    #[msg("Exchange rate isn't new")]
    RateUnchanged,
    #[msg("Call to non-contract")]
    NotAContract,
    #[msg("Downstream call failed")]
    DownstreamCallFailed,
    #[msg("Downstream return data could not be decoded")]
    DownstreamDecodeFailed,
    #[msg("Token contract does not match the bound token contract")]
    TokenContractMismatch,
    #[msg("Operation is not supported by this forwarder kind")]
    WrongForwarderKind,
    #[msg("ProgramMismatch")]
    ProgramMismatch,
    #[msg("Math Overflow")]
    MathOverflow,
    #[msg("Divide by zero")]
    DivideByZero,
}
