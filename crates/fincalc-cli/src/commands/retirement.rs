use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::retirement::{self, RetirementInput};

use super::{amount_arg, count_arg};

/// Arguments for retirement savings accumulation
#[derive(Args)]
pub struct RetirementArgs {
    /// Amount saved every month
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub monthly_contribution: Decimal,

    /// Expected annual return in percent
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Years until retirement
    #[arg(long, value_parser = count_arg, allow_hyphen_values = true)]
    pub years: u32,
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = RetirementInput {
        monthly_contribution: args.monthly_contribution,
        annual_rate: args.rate,
        years: args.years,
    };
    let result = retirement::calculate_retirement_savings(&input)?;
    Ok(serde_json::to_value(result)?)
}
