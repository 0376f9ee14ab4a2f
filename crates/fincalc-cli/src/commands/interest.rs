use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::interest::{self, CompoundInterestInput};

use super::{amount_arg, count_arg};

/// Arguments for a compound interest calculation
#[derive(Args)]
pub struct CompoundInterestArgs {
    /// Principal amount
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Times interest is compounded per year (12 = monthly)
    #[arg(long, value_parser = count_arg, allow_hyphen_values = true)]
    pub frequency: u32,

    /// Time in years
    #[arg(long, value_parser = count_arg, allow_hyphen_values = true)]
    pub years: u32,
}

pub fn run_compound_interest(
    args: CompoundInterestArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input = CompoundInterestInput {
        principal: args.principal,
        annual_rate: args.rate,
        frequency: args.frequency,
        years: args.years,
    };
    let result = interest::calculate_compound_interest(&input)?;
    Ok(serde_json::to_value(result)?)
}
