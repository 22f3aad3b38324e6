pub mod caller_allowance;
pub mod forwarder_state;

pub use caller_allowance::*;
pub use forwarder_state::*;
