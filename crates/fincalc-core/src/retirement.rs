use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{annuity_factor, checked_product, monthly_rate, months_in};
use crate::types::{with_metadata, Breakdown, ComputationOutput, Money, Percent};
use crate::validate::{require_non_negative, require_positive};
use crate::FinCalcResult;

/// Input parameters for retirement savings accumulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub monthly_contribution: Money,
    /// Expected annual return in percent, compounded monthly.
    pub annual_rate: Percent,
    /// Years until retirement.
    pub years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutput {
    pub total_savings: Money,
    pub months: u64,
    pub total_contributions: Money,
    pub interest_earned: Money,
}

impl RetirementOutput {
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::new(
            "Retirement Savings Breakdown",
            &[
                ("Contributions", self.total_contributions),
                ("Interest", self.interest_earned),
            ],
        )
    }
}

/// Accumulated value of equal monthly contributions (ordinary annuity).
///
/// r = R / 1200, n = 12T, total = M·((1+r)^n − 1)/r. A zero rate yields M·n.
pub fn retirement_savings(
    monthly_contribution: Money,
    annual_rate: Percent,
    years: u32,
) -> FinCalcResult<Money> {
    let factor = annuity_factor(monthly_rate(annual_rate), months_in(years))?;
    checked_product(monthly_contribution, factor, "retirement savings")
}

/// Calculate accumulated savings, raw contributions and the interest on top.
pub fn calculate_retirement_savings(
    input: &RetirementInput,
) -> FinCalcResult<ComputationOutput<RetirementOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("monthly_contribution", input.monthly_contribution)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    require_positive("years", input.years)?;

    let months = months_in(input.years);
    let total = retirement_savings(input.monthly_contribution, input.annual_rate, input.years)?;
    let contributions = checked_product(
        input.monthly_contribution,
        Decimal::from(months),
        "total contributions",
    )?;

    if monthly_rate(input.annual_rate).is_zero() {
        warnings.push("Zero return rate: savings equal the sum of contributions".into());
    }

    let output = RetirementOutput {
        total_savings: total,
        months,
        total_contributions: contributions,
        interest_earned: total - contributions,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Ordinary annuity accumulation (end-of-month contributions)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
