use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print JSON to stdout.
pub fn print_json(value: &Value) {
    if let Err(e) = write_json(&mut io::stdout().lock(), value) {
        eprintln!("JSON output error: {}", e);
    }
}

pub fn write_json(out: &mut impl Write, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_is_pretty_and_newline_terminated() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"result": {"amount": "1100"}})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\n  \"result\""));
        assert!(text.ends_with("}\n"));
    }
}
