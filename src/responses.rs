use serde::Serialize;

use crate::forms::ValidationIssue;

/// Plain acknowledgement or error message.
#[derive(Serialize, Debug, Clone)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ApiMessage { message: message.into() }
    }
}

/// 400 body for a rejected submission.
#[derive(Serialize, Debug, Clone)]
pub struct ApiValidationResponse {
    pub message: String,
    pub errors: Vec<ValidationIssue>,
}

/// Result of the spreadsheet connectivity check.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
