use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates as entered by the user, in percent (5 = 5%).
pub type Percent = Decimal;

/// Per-period rates expressed as decimals (0.05 = 5%).
pub type Rate = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// One labelled magnitude of a proportional breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: Money,
}

/// Principal vs. growth split of a calculation, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl Breakdown {
    pub fn new(title: &str, slices: &[(&str, Money)]) -> Self {
        Self {
            title: title.to_string(),
            slices: slices
                .iter()
                .map(|(label, value)| Slice {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Money> {
        self.slices.iter().map(|s| s.value).collect()
    }
}
