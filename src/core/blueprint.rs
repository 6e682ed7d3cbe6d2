use crate::utils::error::{BlueprintError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// Fixed Blueprint location, resolved against the current working directory.
pub const BLUEPRINT_FILE: &str = "render.yaml";

/// Keys every first service entry must carry, checked in this order.
pub const REQUIRED_SERVICE_FIELDS: [&str; 5] =
    ["type", "name", "runtime", "buildCommand", "startCommand"];

/// A parsed Blueprint document. Kept untyped so each structural check can
/// report its own failure kind instead of one opaque deserialization error.
#[derive(Debug, Clone)]
pub struct Blueprint {
    doc: Value,
}

/// Typed view of a service entry, available once the checklist has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub r#type: String,
    pub name: String,
    pub runtime: String,
    pub build_command: String,
    pub start_command: String,
}

impl Blueprint {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BlueprintError::IoError)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(BlueprintError::EmptyDocument);
        }

        let doc: Value = serde_yaml::from_str(content)?;
        if is_empty_document(&doc) {
            return Err(BlueprintError::EmptyDocument);
        }

        Ok(Self { doc })
    }

    /// First entry of the `services` sequence, with each lookup failure
    /// reported as its own error.
    pub fn first_service(&self) -> Result<&Value> {
        let services = self
            .doc
            .get("services")
            .ok_or_else(|| BlueprintError::MissingField {
                field: "services".to_string(),
            })?;

        let services = validation::require_sequence("services", services)?;
        validation::first_entry("services", services)
    }

    /// Number of entries under `services`, zero when the key is absent or
    /// not a sequence.
    pub fn service_count(&self) -> usize {
        self.doc
            .get("services")
            .and_then(Value::as_sequence)
            .map(|s| s.len())
            .unwrap_or(0)
    }

    /// Typed view of the first service. Presence of the required keys is the
    /// checklist's job; this only succeeds when the values are also strings,
    /// so callers treat a failure as a diagnostic, not a verdict.
    pub fn primary_service(&self) -> Result<ServiceEntry> {
        let first = self.first_service()?;
        serde_yaml::from_value(first.clone()).map_err(BlueprintError::ParseError)
    }
}

impl Validate for Blueprint {
    fn validate(&self) -> Result<()> {
        let first = self.first_service()?;

        for field in REQUIRED_SERVICE_FIELDS {
            validation::require_field(first, field)?;
        }

        validation::require_literal(
            "type",
            validation::require_field(first, "type")?,
            "web",
            "first service must be type: web",
        )?;

        validation::require_literal(
            "runtime",
            validation::require_field(first, "runtime")?,
            "node",
            "expected runtime: node",
        )?;

        Ok(())
    }
}

fn is_empty_document(doc: &Value) -> bool {
    match doc {
        Value::Null => true,
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
