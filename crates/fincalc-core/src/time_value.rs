use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FinCalcError;
use crate::types::{Percent, Rate};
use crate::FinCalcResult;

const MONTHS_PER_YEAR: u64 = 12;

/// Monthly rate from an annual percentage: R / (12 * 100).
pub fn monthly_rate(annual_rate: Percent) -> Rate {
    annual_rate / dec!(1200)
}

/// Per-period rate from an annual percentage compounded `periods_per_year` times.
pub fn periodic_rate(annual_rate: Percent, periods_per_year: u32) -> FinCalcResult<Rate> {
    if periods_per_year == 0 {
        return Err(FinCalcError::DivisionByZero {
            context: "periodic rate (zero compounding frequency)".into(),
        });
    }
    Ok(annual_rate / (dec!(100) * Decimal::from(periods_per_year)))
}

/// Number of monthly periods in a term of whole years.
pub fn months_in(years: u32) -> u64 {
    u64::from(years) * MONTHS_PER_YEAR
}

/// Compute (1 + r)^n by square-and-multiply (avoids Decimal::powd drift).
///
/// Fails with `Overflow` once an intermediate leaves the Decimal range.
pub fn compound(rate: Rate, periods: u64) -> FinCalcResult<Decimal> {
    let overflow = || FinCalcError::Overflow {
        context: format!("growth factor (1 + {rate})^{periods}"),
    };

    let mut base = Decimal::ONE.checked_add(rate).ok_or_else(overflow)?;
    let mut result = Decimal::ONE;
    let mut n = periods;
    while n > 0 {
        if n & 1 == 1 {
            result = result.checked_mul(base).ok_or_else(overflow)?;
        }
        n >>= 1;
        if n > 0 {
            base = base.checked_mul(base).ok_or_else(overflow)?;
        }
    }
    Ok(result)
}

/// Accumulation factor of an ordinary annuity: ((1 + r)^n - 1) / r.
///
/// At r = 0 the factor is its limit, n.
pub fn annuity_factor(rate: Rate, periods: u64) -> FinCalcResult<Decimal> {
    if rate.is_zero() {
        return Ok(Decimal::from(periods));
    }

    let growth = compound(rate, periods)?;
    let factor = (growth - Decimal::ONE)
        .checked_div(rate)
        .ok_or_else(|| FinCalcError::Overflow {
            context: "annuity accumulation factor".into(),
        })?;
    Ok(factor)
}

/// Multiply two decimals, mapping overflow to a `FinCalcError`.
pub(crate) fn checked_product(a: Decimal, b: Decimal, context: &str) -> FinCalcResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| FinCalcError::Overflow {
        context: context.to_string(),
    })
}
