use fincalc_core::types::Money;
use rust_decimal::RoundingStrategy;

/// Fixed display symbol for every monetary figure.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format as `<symbol><thousands-grouped integer>.<2 decimals>`.
///
/// Rounds half-to-even at two places. Negative amounts keep the sign after
/// the symbol (`₹-1,234.50`); a value that rounds to zero is never signed.
pub fn format_currency(amount: Money) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    format!(
        "{CURRENCY_SYMBOL}{sign}{}.{:0<2}",
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
