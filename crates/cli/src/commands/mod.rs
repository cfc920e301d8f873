//! Subcommand implementations. Each prints its result as JSON on stdout.

pub mod config_cmd;
pub mod memory;
pub mod model;
pub mod plan;
pub mod tokens;

/// Parse a command-line payload as JSON, falling back to a plain string.
pub fn parse_payload(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
