//! Form submission schemas.
//!
//! Each form type turns a decoded JSON body into a typed submission or a
//! [`ValidationError`] listing every offending field, then maps the
//! submission to a fixed-order spreadsheet row.

pub mod audit;
pub mod contact;
pub mod validate;

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

pub use audit::AuditRequestSubmission;
pub use contact::ContactSubmission;

/// A single field-level reason a submission failed schema checks.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// All issues found in one submission. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Error for a body that could not be read as a JSON object at all.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        ValidationError {
            issues: vec![ValidationIssue {
                path: "body".to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.path, i.message))
            .collect();
        write!(f, "Validation failed: {}", parts.join("; "))
    }
}

/// Reads typed fields out of a JSON object, collecting one issue per bad field
/// instead of stopping at the first.
pub(crate) struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    issues: Vec<ValidationIssue>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(body: &'a Value) -> Result<Self, ValidationError> {
        match body {
            Value::Object(fields) => Ok(FieldReader { fields, issues: Vec::new() }),
            _ => Err(ValidationError::malformed_body("Expected a JSON object")),
        }
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Record `error` against `key` if a rule produced one.
    pub(crate) fn check(&mut self, key: &str, error: Option<String>) {
        if let Some(message) = error {
            self.push(key, message);
        }
    }

    pub(crate) fn required_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            None | Some(Value::Null) => {
                self.push(key, "Required");
                None
            }
            Some(_) => {
                self.push(key, "Expected string");
                None
            }
        }
    }

    pub(crate) fn optional_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            None | Some(Value::Null) => None,
            Some(_) => {
                self.push(key, "Expected string");
                None
            }
        }
    }

    pub(crate) fn optional_string_list(&mut self, key: &str) -> Option<Vec<String>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                let mut bad = Vec::new();
                for (idx, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        _ => bad.push(idx),
                    }
                }
                for idx in bad {
                    self.push(format!("{key}.{idx}"), "Expected string");
                }
                Some(out)
            }
            Some(_) => {
                self.push(key, "Expected array of strings");
                None
            }
        }
    }

    /// Finish reading. Any recorded issue fails the whole submission.
    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues: self.issues })
        }
    }
}

/// Parse a raw request body into a JSON value. An empty body reads as `{}`
/// so that missing required fields are reported individually.
pub fn parse_body(bytes: &[u8]) -> Result<Value, ValidationError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ValidationError::malformed_body(format!("Invalid JSON: {e}")))
}
