pub mod allowance_queries;
pub mod caller_operations;
pub mod exchange_rate_updater;
pub mod forwarder_admin_operations;
pub mod gated_forward;
pub mod mint_forwarder;

pub use allowance_queries::*;
pub use caller_operations::*;
pub use exchange_rate_updater::*;
pub use forwarder_admin_operations::*;
pub use mint_forwarder::*;
