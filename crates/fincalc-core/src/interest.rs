use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_product, compound, periodic_rate};
use crate::types::{with_metadata, Breakdown, ComputationOutput, Money, Percent};
use crate::validate::{require_non_negative, require_positive};
use crate::FinCalcResult;

/// Input parameters for a compound interest calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Money,
    /// Annual interest rate in percent.
    pub annual_rate: Percent,
    /// Times interest is compounded per year.
    pub frequency: u32,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestOutput {
    pub principal: Money,
    pub amount: Money,
    pub interest_earned: Money,
    pub periods: u64,
}

impl CompoundInterestOutput {
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::new(
            "Compound Interest Breakdown",
            &[
                ("Principal", self.principal),
                ("Interest", self.interest_earned),
            ],
        )
    }
}

/// Final amount of `principal` compounded `frequency` times a year for `years`.
///
/// A = P·(1 + R/(100N))^(N·T)
pub fn compound_amount(
    principal: Money,
    annual_rate: Percent,
    frequency: u32,
    years: u32,
) -> FinCalcResult<Money> {
    let rate = periodic_rate(annual_rate, frequency)?;
    let periods = u64::from(frequency) * u64::from(years);
    let growth = compound(rate, periods)?;
    checked_product(principal, growth, "compound interest amount")
}

/// Calculate the compounded amount and the interest earned on top of the principal.
pub fn calculate_compound_interest(
    input: &CompoundInterestInput,
) -> FinCalcResult<ComputationOutput<CompoundInterestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("principal", input.principal)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    require_positive("frequency", input.frequency)?;
    require_positive("years", input.years)?;

    let amount = compound_amount(
        input.principal,
        input.annual_rate,
        input.frequency,
        input.years,
    )?;

    if input.annual_rate.is_zero() {
        warnings.push("Zero interest rate: amount equals principal".into());
    }

    let output = CompoundInterestOutput {
        principal: input.principal,
        amount,
        interest_earned: amount - input.principal,
        periods: u64::from(input.frequency) * u64::from(input.years),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discrete compound interest",
        input,
        warnings,
        elapsed,
        output,
    ))
}
