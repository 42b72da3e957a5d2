use serde_json::Value;

use super::validate::{validate_email, validate_min_len, validate_name};
use super::{FieldReader, ValidationError};

/// Sheet tab that receives audit request rows.
pub const AUDIT_SHEET: &str = "Audit Requests";

/// A validated audit request submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequestSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: String,
    pub business: Option<String>,
    pub goals: Option<Vec<String>>,
}

impl AuditRequestSubmission {
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
        let phone = reader.optional_string("phone");
        let website = reader.required_string("website");
        if let Some(w) = &website {
            reader.check("website", validate_min_len(w, "Website", 1));
        }
        let business = reader.optional_string("business");
        let goals = reader.optional_string_list("goals");

        reader.finish()?;
        Ok(AuditRequestSubmission {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            website: website.unwrap_or_default(),
            business,
            goals,
        })
    }

    /// Rewrite `website` into `https://www.<host...>` form.
    pub fn with_canonical_website(self) -> Self {
        let website = normalize_website(&self.website);
        AuditRequestSubmission { website, ..self }
    }

    /// Columns: name, email, phone, website, business, goals.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone().unwrap_or_default(),
            self.website.clone(),
            self.business.clone().unwrap_or_default(),
            join_goals(self.goals.as_deref()),
        ]
    }
}

/// Join goal tags into one cell. Absent and empty both yield `""`.
pub fn join_goals(goals: Option<&[String]>) -> String {
    goals.map(|g| g.join(", ")).unwrap_or_default()
}

/// Strip a leading `http://`/`https://` and `www.`, then prefix `https://www.`.
pub fn normalize_website(raw: &str) -> String {
    let rest = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    format!("https://www.{rest}")
}
