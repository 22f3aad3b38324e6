pub mod mul_div;
pub mod replenish;
pub mod safe_call;

pub use mul_div::*;
pub use replenish::*;
pub use safe_call::*;
