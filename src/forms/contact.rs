use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::validate::{validate_email, validate_name};
use super::{FieldReader, ValidationError};

/// Sheet tab that receives contact form rows.
pub const CONTACT_SHEET: &str = "Contact Form";

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(body)?;

        let name = reader.required_string("name");
        if let Some(n) = &name {
            reader.check("name", validate_name(n));
        }
        let email = reader.required_string("email");
        if let Some(e) = &email {
            reader.check("email", validate_email(e));
        }
        let message = reader.optional_string("message");

        reader.finish()?;
        Ok(ContactSubmission {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message,
        })
    }

    /// Columns: name, email, message, and optionally a submission timestamp.
    pub fn to_row(&self, submitted_at: Option<DateTime<Utc>>) -> Vec<String> {
        let mut row = vec![
            self.name.clone(),
            self.email.clone(),
            self.message.clone().unwrap_or_default(),
        ];
        if let Some(ts) = submitted_at {
            row.push(ts.to_rfc3339_opts(SecondsFormat::Millis, true));
        }
        row
    }
}
