pub mod minter_allowance;
pub mod oracle_store;
pub mod token_state;

pub use minter_allowance::*;
pub use oracle_store::*;
pub use token_state::*;
