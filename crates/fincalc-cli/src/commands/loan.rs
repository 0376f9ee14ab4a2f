use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::loan::{self, EmiInput};

use super::{amount_arg, count_arg};

/// Arguments for an EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub principal: Decimal,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, value_parser = count_arg, allow_hyphen_values = true)]
    pub years: u32,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = EmiInput {
        principal: args.principal,
        annual_rate: args.rate,
        years: args.years,
    };
    let result = loan::calculate_emi(&input)?;
    Ok(serde_json::to_value(result)?)
}
