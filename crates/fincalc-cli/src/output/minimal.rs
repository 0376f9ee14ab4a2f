use serde_json::Value;

use super::{result_fields, scalar_text};

/// Headline figure of each calculation, in priority order.
const HEADLINE_KEYS: [&str; 4] = ["installment", "amount", "future_value", "total_savings"];

/// Print just the headline figure of the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

pub fn minimal_text(value: &Value) -> String {
    let Some(fields) = result_fields(value) else {
        return scalar_text(value);
    };

    HEADLINE_KEYS
        .iter()
        .find_map(|key| fields.get(*key).filter(|v| !v.is_null()))
        .map(scalar_text)
        .or_else(|| {
            fields
                .iter()
                .next()
                .map(|(key, val)| format!("{}: {}", key, scalar_text(val)))
        })
        .unwrap_or_default()
}
