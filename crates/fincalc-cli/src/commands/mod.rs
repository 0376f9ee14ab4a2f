pub mod interest;
pub mod investment;
pub mod loan;
pub mod retirement;

use fincalc_core::validate;
use rust_decimal::Decimal;

/// clap value parser for amounts and percentage rates (>= 0).
pub fn amount_arg(s: &str) -> Result<Decimal, String> {
    validate::parse_amount(s).map_err(|e| e.to_string())
}

/// clap value parser for terms and frequencies (> 0).
pub fn count_arg(s: &str) -> Result<u32, String> {
    validate::parse_count(s).map_err(|e| e.to_string())
}
