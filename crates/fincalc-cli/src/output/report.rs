//! Result lines printed after each interactive calculation.

use fincalc_core::interest::CompoundInterestOutput;
use fincalc_core::investment::FutureValueOutput;
use fincalc_core::loan::EmiOutput;
use fincalc_core::retirement::RetirementOutput;

use super::currency::format_currency;

pub fn emi_lines(r: &EmiOutput) -> Vec<String> {
    vec![
        format!("Monthly EMI: {}", format_currency(r.installment)),
        format!(
            "Total payment over {} months: {}",
            r.months,
            format_currency(r.total_payment)
        ),
        format!("Total interest paid: {}", format_currency(r.total_interest)),
    ]
}

pub fn compound_interest_lines(r: &CompoundInterestOutput) -> Vec<String> {
    vec![
        format!("Compound Interest Amount: {}", format_currency(r.amount)),
        format!("Interest Earned: {}", format_currency(r.interest_earned)),
    ]
}

pub fn future_value_lines(r: &FutureValueOutput) -> Vec<String> {
    vec![
        format!("Future Value: {}", format_currency(r.future_value)),
        format!("Gain: {}", format_currency(r.gain)),
    ]
}

pub fn retirement_lines(r: &RetirementOutput) -> Vec<String> {
    vec![
        format!(
            "Estimated Retirement Savings: {}",
            format_currency(r.total_savings)
        ),
        format!(
            "Total Contributions: {}",
            format_currency(r.total_contributions)
        ),
        format!("Interest Earned: {}", format_currency(r.interest_earned)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::loan::{calculate_emi, EmiInput};
    use fincalc_core::retirement::{calculate_retirement_savings, RetirementInput};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_emi_report() {
        let out = calculate_emi(&EmiInput {
            principal: dec!(100000),
            annual_rate: dec!(10),
            years: 1,
        })
        .unwrap();
        assert_eq!(
            emi_lines(&out.result),
            vec![
                "Monthly EMI: ₹8,791.59",
                "Total payment over 12 months: ₹105,499.06",
                "Total interest paid: ₹5,499.06",
            ]
        );
    }

    #[test]
    fn test_retirement_report() {
        let out = calculate_retirement_savings(&RetirementInput {
            monthly_contribution: dec!(500),
            annual_rate: dec!(6),
            years: 10,
        })
        .unwrap();
        assert_eq!(
            retirement_lines(&out.result),
            vec![
                "Estimated Retirement Savings: ₹81,939.67",
                "Total Contributions: ₹60,000.00",
                "Interest Earned: ₹21,939.67",
            ]
        );
    }
}
