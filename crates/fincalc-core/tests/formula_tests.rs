use fincalc_core::interest::{self, CompoundInterestInput};
use fincalc_core::investment::{self, FutureValueInput};
use fincalc_core::loan::{self, EmiInput};
use fincalc_core::retirement::{self, RetirementInput};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_emi_reference_loan() {
    let out = loan::calculate_emi(&EmiInput {
        principal: dec!(100000),
        annual_rate: dec!(10),
        years: 1,
    })
    .unwrap();
    let r = out.result;
    assert_eq!(r.months, 12);
    assert_eq!(r.installment.round_dp(2), dec!(8791.59));
    assert!((r.total_payment - dec!(105499.08)).abs() <= dec!(0.02));
    assert!((r.total_interest - dec!(5499.08)).abs() <= dec!(0.02));
}

#[test]
fn test_compound_interest_reference() {
    let out = interest::calculate_compound_interest(&CompoundInterestInput {
        principal: dec!(10000),
        annual_rate: dec!(5),
        frequency: 4,
        years: 2,
    })
    .unwrap();
    assert_eq!(out.result.amount.round_dp(2), dec!(11044.86));
}

#[test]
fn test_future_value_reference() {
    let out = investment::calculate_future_value(&FutureValueInput {
        investment: dec!(5000),
        annual_rate: dec!(8),
        years: 10,
    })
    .unwrap();
    assert_eq!(out.result.future_value.round_dp(2), dec!(10794.62));
}

#[test]
fn test_retirement_reference() {
    let out = retirement::calculate_retirement_savings(&RetirementInput {
        monthly_contribution: dec!(500),
        annual_rate: dec!(6),
        years: 10,
    })
    .unwrap();
    let r = out.result;
    assert_eq!(r.total_savings.round_dp(2), dec!(81939.67));
    assert_eq!(r.total_contributions, dec!(60000));
    assert_eq!(r.interest_earned.round_dp(2), dec!(21939.67));
}

// ===========================================================================
// Ordering properties
// ===========================================================================

const AMOUNTS: [Decimal; 4] = [dec!(0), dec!(1), dec!(2500.50), dec!(750000)];
const RATES: [Decimal; 4] = [dec!(0.25), dec!(3), dec!(8.5), dec!(24)];
const TERMS: [u32; 4] = [1, 5, 15, 30];

#[test]
fn test_emi_total_payment_covers_principal() {
    for p in AMOUNTS {
        for r in RATES {
            for t in TERMS {
                let inst = loan::emi(p, r, t).unwrap();
                let total = inst.amount * Decimal::from(inst.months);
                assert!(total >= p, "EMI({p},{r},{t}) total {total} < principal");
                if p > Decimal::ZERO {
                    assert!(inst.amount > Decimal::ZERO);
                }
            }
        }
    }
}

#[test]
fn test_compound_amount_never_below_principal() {
    for p in AMOUNTS {
        for r in RATES {
            for n in [1, 4, 12, 365] {
                let amount = interest::compound_amount(p, r, n, 10).unwrap();
                assert!(amount >= p);
                if p > Decimal::ZERO {
                    assert!(amount > p, "CI({p},{r},{n}) should grow");
                }
            }
        }
        assert_eq!(interest::compound_amount(p, Decimal::ZERO, 12, 10).unwrap(), p);
    }
}

#[test]
fn test_future_value_never_below_investment() {
    for v in AMOUNTS {
        for r in RATES {
            for t in TERMS {
                let fv = investment::future_value(v, r, t).unwrap();
                assert!(fv >= v);
                if v > Decimal::ZERO {
                    assert!(fv > v);
                }
            }
        }
        assert_eq!(investment::future_value(v, Decimal::ZERO, 7).unwrap(), v);
    }
}

#[test]
fn test_retirement_exceeds_contributions_with_positive_rate() {
    for m in AMOUNTS.into_iter().filter(|m| !m.is_zero()) {
        for r in RATES {
            for t in TERMS {
                let total = retirement::retirement_savings(m, r, t).unwrap();
                let contributions = m * Decimal::from(12 * t);
                assert!(total > contributions, "RS({m},{r},{t})");
            }
        }
    }
}

// ===========================================================================
// Zero-rate correction: these divide by zero in a naive implementation
// ===========================================================================

#[test]
fn test_zero_rate_emi_is_principal_over_months() {
    let inst = loan::emi(dec!(60000), Decimal::ZERO, 5).unwrap();
    assert_eq!(inst.amount, dec!(1000));
    assert_eq!(inst.months, 60);
}

#[test]
fn test_emi_interest_is_never_negative() {
    for p in AMOUNTS {
        for r in [Decimal::ZERO, dec!(0.0001)].into_iter().chain(RATES) {
            for t in [1, 3, 7, 30] {
                let out = loan::calculate_emi(&EmiInput {
                    principal: p,
                    annual_rate: r,
                    years: t,
                })
                .unwrap();
                assert!(
                    out.result.total_interest >= Decimal::ZERO,
                    "EMI({p},{r},{t}) interest {}",
                    out.result.total_interest
                );
            }
        }
        let zero = loan::calculate_emi(&EmiInput {
            principal: p,
            annual_rate: Decimal::ZERO,
            years: 7,
        })
        .unwrap();
        assert_eq!(zero.result.total_payment, p);
        assert_eq!(zero.result.total_interest, Decimal::ZERO);
    }
}

#[test]
fn test_zero_rate_retirement_is_plain_contributions() {
    for m in AMOUNTS {
        for t in TERMS {
            let total = retirement::retirement_savings(m, Decimal::ZERO, t).unwrap();
            assert_eq!(total, m * Decimal::from(12 * t));
        }
    }
}

// ===========================================================================
// Determinism
// ===========================================================================

#[test]
fn test_formulas_are_idempotent() {
    let a = loan::emi(dec!(250000), dec!(7.35), 20).unwrap();
    let b = loan::emi(dec!(250000), dec!(7.35), 20).unwrap();
    assert_eq!(a, b);

    let a = interest::compound_amount(dec!(999.99), dec!(4.1), 365, 12).unwrap();
    let b = interest::compound_amount(dec!(999.99), dec!(4.1), 365, 12).unwrap();
    assert_eq!(a, b);

    let a = retirement::retirement_savings(dec!(1500), dec!(11), 35).unwrap();
    let b = retirement::retirement_savings(dec!(1500), dec!(11), 35).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_envelope_metadata() {
    let out = investment::calculate_future_value(&FutureValueInput {
        investment: dec!(100),
        annual_rate: dec!(5),
        years: 3,
    })
    .unwrap();
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert_eq!(out.assumptions["years"], serde_json::json!(3));
}
