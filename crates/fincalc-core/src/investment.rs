use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_product, compound};
use crate::types::{with_metadata, Breakdown, ComputationOutput, Money, Percent};
use crate::validate::{require_non_negative, require_positive};
use crate::FinCalcResult;

/// Input parameters for the future value of a lump sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueInput {
    pub investment: Money,
    /// Annual growth rate in percent, compounded yearly.
    pub annual_rate: Percent,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueOutput {
    pub investment: Money,
    pub future_value: Money,
    pub gain: Money,
}

impl FutureValueOutput {
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::new(
            "Investment Growth",
            &[("Initial Investment", self.investment), ("Gain", self.gain)],
        )
    }
}

/// FV = V·(1 + R/100)^T
pub fn future_value(investment: Money, annual_rate: Percent, years: u32) -> FinCalcResult<Money> {
    let growth = compound(annual_rate / dec!(100), u64::from(years))?;
    checked_product(investment, growth, "future value")
}

/// Calculate the future value of a lump sum and the gain over the original investment.
pub fn calculate_future_value(
    input: &FutureValueInput,
) -> FinCalcResult<ComputationOutput<FutureValueOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("investment", input.investment)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    require_positive("years", input.years)?;

    let fv = future_value(input.investment, input.annual_rate, input.years)?;
    if input.annual_rate.is_zero() {
        warnings.push("Zero growth rate: future value equals the investment".into());
    }

    let output = FutureValueOutput {
        investment: input.investment,
        future_value: fv,
        gain: fv - input.investment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lump-sum future value (annual compounding)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
