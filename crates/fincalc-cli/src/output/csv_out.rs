use serde_json::Value;
use std::io::{self, Write};

use super::{result_fields, scalar_text};

/// Write the result fields as two-column CSV to stdout.
pub fn print_csv(value: &Value) {
    if let Err(e) = write_csv(io::stdout().lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

pub fn write_csv(out: impl Write, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["field", "value"])?;

    if let Some(fields) = result_fields(value) {
        for (key, val) in fields {
            wtr.write_record([key.as_str(), &scalar_text(val)])?;
        }
    } else {
        wtr.write_record(["value", &scalar_text(value)])?;
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        for w in warnings {
            wtr.write_record(["warning", &scalar_text(w)])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
