pub mod error;
pub mod time_value;
pub mod types;
pub mod validate;

pub mod interest;
pub mod investment;
pub mod loan;
pub mod retirement;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
