pub mod initialize_token;
pub mod mint_tokens;
pub mod minter_operations;
pub mod oracle_operations;

pub use initialize_token::*;
pub use mint_tokens::*;
pub use minter_operations::*;
pub use oracle_operations::*;
