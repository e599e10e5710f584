//! Human-readable rendering of response bodies.

use std::io::{self, Write};

use serde_json::Value;

/// Pretty-print a JSON body with two-space indentation, or pass anything else
/// through untouched.
pub fn render(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Write the rendered body followed by a newline.
pub fn write_response<W: Write>(mut out: W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", render(text))
}

/// Write the rendered body to stdout.
pub fn print_response(text: &str) -> io::Result<()> {
    write_response(io::stdout().lock(), text)
}
