use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value::{checked_product, compound, monthly_rate, months_in};
use crate::types::{with_metadata, Breakdown, ComputationOutput, Money, Percent};
use crate::validate::{require_non_negative, require_positive};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Equated monthly installment and the number of months it is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub amount: Money,
    pub months: u64,
}

/// Input parameters for an EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    /// Annual interest rate in percent.
    pub annual_rate: Percent,
    pub years: u32,
}

/// Installment plus the aggregate totals derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    pub principal: Money,
    pub installment: Money,
    pub months: u64,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl EmiOutput {
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::new(
            "Loan Breakdown",
            &[
                ("Principal", self.principal),
                ("Interest", self.total_interest),
            ],
        )
    }
}

// ---------------------------------------------------------------------------
// Formula
// ---------------------------------------------------------------------------

/// Monthly installment that fully amortizes `principal` over `years`.
///
/// r = R / 1200, n = 12T, EMI = P·r·(1+r)^n / ((1+r)^n − 1).
/// A zero rate yields the straight-line installment P / n.
pub fn emi(principal: Money, annual_rate: Percent, years: u32) -> FinCalcResult<Installment> {
    let months = months_in(years);
    if months == 0 {
        return Err(FinCalcError::DivisionByZero {
            context: "EMI over a zero-length term".into(),
        });
    }

    let r = monthly_rate(annual_rate);
    if r.is_zero() {
        return Ok(Installment {
            amount: principal / Decimal::from(months),
            months,
        });
    }

    // Evaluated as P·r / (1 − (1+r)^−n). A growth factor beyond the decimal
    // range means (1+r)^−n is below 28dp resolution, so the installment is P·r.
    let discount = match compound(r, months) {
        Ok(growth) => Decimal::ONE / growth,
        Err(FinCalcError::Overflow { .. }) => Decimal::ZERO,
        Err(e) => return Err(e),
    };
    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(FinCalcError::DivisionByZero {
            context: "EMI amortization factor".into(),
        });
    }

    let interest_share = checked_product(principal, r, "EMI principal × monthly rate")?;
    let amount = interest_share
        .checked_div(denominator)
        .ok_or_else(|| FinCalcError::Overflow {
            context: "EMI installment".into(),
        })?;

    Ok(Installment { amount, months })
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Calculate the EMI together with total payment and total interest.
pub fn calculate_emi(input: &EmiInput) -> FinCalcResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    require_non_negative("principal", input.principal)?;
    require_non_negative("annual_rate", input.annual_rate)?;
    require_positive("years", input.years)?;

    let installment = emi(input.principal, input.annual_rate, input.years)?;
    let zero_rate = monthly_rate(input.annual_rate).is_zero();
    // P / n carries a 28-digit remainder; multiplying it back out must not
    // invent interest on an interest-free loan.
    let total_payment = if zero_rate {
        input.principal
    } else {
        checked_product(
            installment.amount,
            Decimal::from(installment.months),
            "EMI total payment",
        )?
    };
    let total_interest = total_payment - input.principal;

    if zero_rate {
        warnings.push(
            "Zero interest rate: installment is principal divided evenly over the term".into(),
        );
    }
    if input.principal.is_zero() {
        warnings.push("Principal is zero: nothing to repay".into());
    }

    let output = EmiOutput {
        principal: input.principal,
        installment: installment.amount,
        months: installment.months,
        total_payment,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equated monthly installment (reducing balance, monthly compounding)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
