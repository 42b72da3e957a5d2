use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "Missing required environment variable {var}"),
            ConfigError::Invalid { var, value } => {
                write!(f, "Invalid value for {var}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Per-form behaviour switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOptions {
    /// Rewrite audit `website` values to `https://www.<host>`.
    pub normalize_website: bool,
    /// Append a submission timestamp as a fourth contact column.
    pub contact_timestamp: bool,
}

/// Spreadsheet target and service-account credentials.
#[derive(Clone)]
pub struct SheetsSettings {
    pub spreadsheet_id: String,
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
    pub api_base: String,
    pub timeout: Duration,
}

// Keep the key out of logs and panics.
impl fmt::Debug for SheetsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsSettings")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("client_email", &self.client_email)
            .field("private_key", &format_args!("<{} bytes>", self.private_key.len()))
            .field("token_uri", &self.token_uri)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub forms: FormOptions,
    pub sheets: SheetsSettings,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `get`, which returns the raw value of a variable.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            get(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let sheets = SheetsSettings {
            spreadsheet_id: required("GOOGLE_SHEET_ID")?,
            client_email: required("GOOGLE_CLIENT_EMAIL")?,
            private_key: unescape_private_key(&required("GOOGLE_PRIVATE_KEY")?),
            token_uri: get("GOOGLE_TOKEN_URI").unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
            api_base: get("SHEETS_API_BASE")
                .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string()),
            timeout: Duration::from_secs(parse_or(
                "SHEETS_TIMEOUT_SECS",
                get("SHEETS_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )?),
        };

        Ok(AppConfig {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            static_dir: get("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            forms: FormOptions {
                normalize_website: parse_flag("NORMALIZE_WEBSITE", get("NORMALIZE_WEBSITE"))?,
                contact_timestamp: parse_flag("CONTACT_TIMESTAMP", get("CONTACT_TIMESTAMP"))?,
            },
            sheets,
        })
    }
}

/// Env files usually carry the PEM body with literal `\n` sequences.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: v }),
    }
}

fn parse_flag(var: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(v) = value else { return Ok(false) };
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: v }),
    }
}
