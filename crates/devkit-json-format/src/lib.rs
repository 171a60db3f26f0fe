//! JSON validation and formatting.
//!
//! Takes a JSON document as text and re-emits it in one of three shapes:
//! pretty (two-space indent, key order preserved), compact (single line,
//! key order preserved), or stable (single line, object keys sorted
//! recursively — a deterministic form suitable for comparison and
//! fingerprinting). Invalid input is reported with the parser's own
//! message, which names the offending line and column.
//!
//! # Example
//!
//! ```
//! use devkit_json_format::{format_pretty, format_stable};
//!
//! let pretty = format_pretty(r#"{"b":1,"a":2}"#).unwrap();
//! assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": 2\n}");
//!
//! let stable = format_stable(r#"{"b":1,"a":2}"#).unwrap();
//! assert_eq!(stable, r#"{"a":2,"b":1}"#);
//! ```

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("empty input")]
    Empty,
    #[error("{0}")]
    Invalid(#[from] serde_json::Error),
}

fn parse(input: &str) -> Result<Value, FormatError> {
    if input.trim().is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(serde_json::from_str(input)?)
}

/// Check that `input` parses as JSON, without producing output.
pub fn validate(input: &str) -> Result<(), FormatError> {
    parse(input).map(|_| ())
}

/// Re-emit `input` with two-space indentation. Object key order is kept
/// as written.
pub fn format_pretty(input: &str) -> Result<String, FormatError> {
    let value = parse(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-emit `input` on a single line with no extra whitespace.
pub fn format_compact(input: &str) -> Result<String, FormatError> {
    let value = parse(input)?;
    Ok(serde_json::to_string(&value)?)
}

/// Re-emit `input` on a single line with object keys sorted recursively.
///
/// Two documents that differ only in key order produce byte-identical
/// stable output.
pub fn format_stable(input: &str) -> Result<String, FormatError> {
    let value = parse(input)?;
    Ok(to_stable_string(&value))
}

/// Deterministic serialization of an already-parsed value.
pub fn to_stable_string(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let mut out = String::from('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&to_stable_string(item));
            }
            out.push(']');
            out
        }
        Value::Object(obj) => {
            let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            keys.sort_unstable();
            let mut out = String::from('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key).unwrap_or_default());
                out.push(':');
                out.push_str(&to_stable_string(&obj[*key]));
            }
            out.push('}');
            out
        }
        primitive => serde_json::to_string(primitive).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_uses_two_space_indent() {
        let out = format_pretty(r#"{"a":{"b":[1,2]}}"#).unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": {\n    \"b\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn pretty_preserves_key_order() {
        let out = format_pretty(r#"{"z":1,"a":2}"#).unwrap();
        let z = out.find("\"z\"").unwrap();
        let a = out.find("\"a\"").unwrap();
        assert!(z < a);
    }

    #[test]
    fn compact_strips_whitespace() {
        let out = format_compact("{ \"a\" : [ 1 , 2 ] }\n").unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn stable_sorts_keys_at_every_depth() {
        let out = format_stable(r#"{"b":{"d":1,"c":2},"a":3}"#).unwrap();
        assert_eq!(out, r#"{"a":3,"b":{"c":2,"d":1}}"#);
    }

    #[test]
    fn stable_is_order_insensitive() {
        let a = format_stable(r#"{"x":1,"y":2}"#).unwrap();
        let b = format_stable(r#"{"y":2,"x":1}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn stable_escapes_strings() {
        let out = to_stable_string(&json!({"k": "line\nbreak \"q\""}));
        assert_eq!(out, r#"{"k":"line\nbreak \"q\""}"#);
    }

    #[test]
    fn all_modes_agree_on_the_value() {
        let input = r#"{"a": [1, true, null, "s"]}"#;
        let expected: Value = serde_json::from_str(input).unwrap();
        for out in [
            format_pretty(input).unwrap(),
            format_compact(input).unwrap(),
            format_stable(input).unwrap(),
        ] {
            let reparsed: Value = serde_json::from_str(&out).unwrap();
            assert_eq!(reparsed, expected);
        }
    }

    #[test]
    fn invalid_input_reports_position() {
        let err = format_pretty("{\"a\": }").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line"), "got: {msg}");
        assert!(msg.contains("column"), "got: {msg}");
    }

    #[test]
    fn empty_input_is_its_own_error() {
        assert!(matches!(validate(""), Err(FormatError::Empty)));
        assert!(matches!(validate("  \n "), Err(FormatError::Empty)));
    }

    #[test]
    fn validate_accepts_scalars() {
        assert!(validate("null").is_ok());
        assert!(validate("42").is_ok());
        assert!(validate("\"x\"").is_ok());
    }
}
