//! Parse-and-validate contract behind every numeric prompt.
//!
//! The functions here never loop or print; the interactive caller inspects
//! the `Result` and decides whether to ask again.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::types::Money;
use crate::FinCalcResult;

/// Constraint a prompted number must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberKind {
    /// Amounts and percentage rates: any real >= 0.
    NonNegativeReal,
    /// Terms and compounding frequencies: any integer > 0.
    PositiveInteger,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::NonNegativeReal => write!(f, "non-negative number"),
            NumberKind::PositiveInteger => write!(f, "positive whole number"),
        }
    }
}

/// A validated number, tagged by the constraint it satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scalar {
    Real(Money),
    Count(u32),
}

impl Scalar {
    pub fn as_real(&self) -> Option<Money> {
        match self {
            Scalar::Real(v) => Some(*v),
            Scalar::Count(_) => None,
        }
    }

    pub fn as_count(&self) -> Option<u32> {
        match self {
            Scalar::Count(v) => Some(*v),
            Scalar::Real(_) => None,
        }
    }
}

/// Parse `text` according to `kind`.
pub fn parse_number(text: &str, kind: NumberKind) -> FinCalcResult<Scalar> {
    match kind {
        NumberKind::NonNegativeReal => parse_amount(text).map(Scalar::Real),
        NumberKind::PositiveInteger => parse_count(text).map(Scalar::Count),
    }
}

/// Parse a non-negative decimal. Accepts plain and scientific notation.
pub fn parse_amount(text: &str) -> FinCalcResult<Money> {
    let trimmed = text.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| not_a_number(trimmed))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(FinCalcError::InvalidNumber(
            "value must be non-negative".into(),
        ));
    }
    Ok(value.abs())
}

/// Parse a strictly positive whole number.
pub fn parse_count(text: &str) -> FinCalcResult<u32> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FinCalcError::InvalidNumber(format!(
            "'{trimmed}' is not a whole number"
        )));
    }

    let negative = trimmed.starts_with('-');
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(FinCalcError::InvalidNumber(
            "value must be greater than zero".into(),
        ));
    }

    digits.parse::<u32>().map_err(|_| {
        FinCalcError::InvalidNumber(format!("'{trimmed}' is too large (maximum {})", u32::MAX))
    })
}

fn not_a_number(text: &str) -> FinCalcError {
    FinCalcError::InvalidNumber(format!("could not convert '{text}' to a number"))
}

/// Check that a programmatically supplied amount is non-negative.
pub(crate) fn require_non_negative(field: &str, value: Money) -> FinCalcResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FinCalcError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be >= 0"),
        });
    }
    Ok(())
}

/// Check that a programmatically supplied count is non-zero.
pub(crate) fn require_positive(field: &str, value: u32) -> FinCalcResult<()> {
    if value == 0 {
        return Err(FinCalcError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be > 0"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_accepts_plain_decimals() {
        assert_eq!(parse_amount("1500").unwrap(), dec!(1500));
        assert_eq!(parse_amount("  7.25\n").unwrap(), dec!(7.25));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e5").unwrap(), dec!(100000));
        assert_eq!(parse_amount("2.5E3").unwrap(), dec!(2500));
    }

    #[test]
    fn test_amount_rejects_negative() {
        let err = parse_amount("-10").unwrap_err();
        assert_eq!(
            err,
            FinCalcError::InvalidNumber("value must be non-negative".into())
        );
    }

    #[test]
    fn test_amount_negative_zero_is_zero() {
        let value = parse_amount("-0.0").unwrap();
        assert!(value.is_zero());
        assert!(!value.is_sign_negative());
    }

    #[test]
    fn test_amount_rejects_text_nan_and_infinity() {
        for text in ["abc", "", "nan", "inf", "12abc", "1,000"] {
            assert!(parse_amount(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_count_accepts_positive_integers() {
        assert_eq!(parse_count("30").unwrap(), 30);
        assert_eq!(parse_count(" +4 ").unwrap(), 4);
    }

    #[test]
    fn test_count_rejects_zero_and_negative() {
        for text in ["0", "-3", "000", "-0"] {
            assert_eq!(
                parse_count(text).unwrap_err(),
                FinCalcError::InvalidNumber("value must be greater than zero".into()),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_count_rejects_fractions_and_text() {
        for text in ["3.0", "2.5", "ten", "", "+", "1e2"] {
            assert!(parse_count(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_count_rejects_out_of_range() {
        assert!(parse_count("4294967296").is_err());
        assert_eq!(parse_count("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_number_dispatches_on_kind() {
        assert_eq!(
            parse_number("12.5", NumberKind::NonNegativeReal).unwrap(),
            Scalar::Real(dec!(12.5))
        );
        assert_eq!(
            parse_number("12", NumberKind::PositiveInteger).unwrap(),
            Scalar::Count(12)
        );
        assert!(parse_number("12.5", NumberKind::PositiveInteger).is_err());
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(Scalar::Real(dec!(1)).as_real(), Some(dec!(1)));
        assert_eq!(Scalar::Real(dec!(1)).as_count(), None);
        assert_eq!(Scalar::Count(3).as_count(), Some(3));
    }
}
