use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::currency::format_currency;
use super::{result_fields, scalar_text};

/// Fields rendered as plain counts rather than currency.
const COUNT_FIELDS: [&str; 2] = ["months", "periods"];

/// Format the result as a Field/Value table, followed by warnings and methodology.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

pub fn render_table(value: &Value) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    if let Some(fields) = result_fields(value) {
        for (key, val) in fields {
            builder.push_record([field_label(key), cell_text(key, val)]);
        }
    }
    let mut text = Table::from(builder).to_string();

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            text.push_str("\n\nWarnings:");
            for w in warnings {
                text.push_str(&format!("\n  - {}", scalar_text(w)));
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        text.push_str(&format!("\n\nMethodology: {}", meth));
    }
    text
}

/// `total_interest` -> `Total interest`
fn field_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cell_text(key: &str, value: &Value) -> String {
    if COUNT_FIELDS.contains(&key) {
        return scalar_text(value);
    }
    match value {
        Value::String(s) => Decimal::from_str(s)
            .map(format_currency)
            .unwrap_or_else(|_| s.clone()),
        _ => scalar_text(value),
    }
}
