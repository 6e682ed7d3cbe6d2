use crate::utils::error::{BlueprintError, Result};
use serde_yaml::{Sequence, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn require_sequence<'a>(field_name: &str, value: &'a Value) -> Result<&'a Sequence> {
    value
        .as_sequence()
        .ok_or_else(|| BlueprintError::TypeMismatch {
            field: field_name.to_string(),
        })
}

pub fn first_entry<'a>(field_name: &str, seq: &'a Sequence) -> Result<&'a Value> {
    seq.first().ok_or_else(|| BlueprintError::EmptyCollection {
        field: field_name.to_string(),
    })
}

pub fn require_field<'a>(entry: &'a Value, field_name: &str) -> Result<&'a Value> {
    entry
        .get(field_name)
        .ok_or_else(|| BlueprintError::MissingServiceField {
            field: field_name.to_string(),
        })
}

pub fn require_literal(field_name: &str, value: &Value, expected: &str, reason: &str) -> Result<()> {
    match value.as_str() {
        Some(s) if s == expected => Ok(()),
        _ => Err(BlueprintError::ValueMismatch {
            field: field_name.to_string(),
            value: display_value(value),
            reason: reason.to_string(),
        }),
    }
}

fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_sequence() {
        let seq: Value = serde_yaml::from_str("[a, b]").unwrap();
        assert!(require_sequence("services", &seq).is_ok());

        let map: Value = serde_yaml::from_str("a: b").unwrap();
        let err = require_sequence("services", &map).unwrap_err();
        assert_eq!(err.to_string(), "services must be a list");
    }

    #[test]
    fn test_first_entry() {
        let seq: Sequence = vec![Value::from("only")];
        assert!(first_entry("services", &seq).is_ok());

        let empty: Sequence = vec![];
        let err = first_entry("services", &empty).unwrap_err();
        assert_eq!(err.to_string(), "no services defined");
    }

    #[test]
    fn test_require_field() {
        let entry: Value = serde_yaml::from_str("type: web").unwrap();
        assert!(require_field(&entry, "type").is_ok());

        let err = require_field(&entry, "runtime").unwrap_err();
        assert_eq!(err.to_string(), "service missing required field: runtime");
    }

    #[test]
    fn test_require_literal() {
        let web = Value::from("web");
        assert!(require_literal("type", &web, "web", "first service must be type: web").is_ok());

        let worker = Value::from("worker");
        let err =
            require_literal("type", &worker, "web", "first service must be type: web").unwrap_err();
        assert_eq!(err.to_string(), "first service must be type: web");

        // non-string values never match a string literal
        let numeric = Value::from(3);
        assert!(require_literal("runtime", &numeric, "node", "expected runtime: node").is_err());
    }
}
