pub mod comparison;
pub mod valuation;

pub use comparison::*;
pub use valuation::*;
