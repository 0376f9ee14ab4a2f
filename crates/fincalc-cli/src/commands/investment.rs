use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::investment::{self, FutureValueInput};

use super::{amount_arg, count_arg};

/// Arguments for the future value of a lump-sum investment
#[derive(Args)]
pub struct FutureValueArgs {
    /// Initial investment
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub investment: Decimal,

    /// Annual growth rate in percent
    #[arg(long, value_parser = amount_arg, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Number of years
    #[arg(long, value_parser = count_arg, allow_hyphen_values = true)]
    pub years: u32,
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = FutureValueInput {
        investment: args.investment,
        annual_rate: args.rate,
        years: args.years,
    };
    let result = investment::calculate_future_value(&input)?;
    Ok(serde_json::to_value(result)?)
}
