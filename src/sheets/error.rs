use std::fmt;

/// Failure talking to the spreadsheet service. Never retried.
#[derive(Debug)]
pub enum AppendFailure {
    /// Service-account key or email unusable.
    Credentials(String),
    /// Token endpoint refused the assertion.
    Auth { status: u16, body: String },
    /// Sheets API answered with a non-success status (quota, permission, bad range).
    Api { status: u16, body: String },
    Transport(reqwest::Error),
    Decode(String),
}

impl fmt::Display for AppendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppendFailure::Credentials(e) => write!(f, "Credentials error: {e}"),
            AppendFailure::Auth { status, body } => {
                write!(f, "Token exchange failed ({status}): {body}")
            }
            AppendFailure::Api { status, body } => write!(f, "Sheets API error ({status}): {body}"),
            AppendFailure::Transport(e) => write!(f, "Transport error: {e}"),
            AppendFailure::Decode(e) => write!(f, "Unexpected response: {e}"),
        }
    }
}

impl std::error::Error for AppendFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppendFailure::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppendFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppendFailure::Decode(e.to_string())
        } else {
            AppendFailure::Transport(e)
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppendFailure {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppendFailure::Credentials(e.to_string())
    }
}
