//! OAuth2 access tokens for a Google service account (JWT-bearer grant).

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::error::AppendFailure;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Serialize, Debug)]
pub struct Claims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Signs assertions for one service account and caches the resulting token.
pub struct ServiceAccountTokens {
    client_email: String,
    key: EncodingKey,
    token_uri: String,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokens {
    /// Fails immediately if the PEM key cannot be parsed.
    pub fn new(
        client_email: &str,
        private_key_pem: &str,
        token_uri: &str,
        http: reqwest::Client,
    ) -> Result<Self, AppendFailure> {
        if client_email.trim().is_empty() {
            return Err(AppendFailure::Credentials("client email is empty".to_string()));
        }
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;
        Ok(ServiceAccountTokens {
            client_email: client_email.to_string(),
            key,
            token_uri: token_uri.to_string(),
            http,
            cached: Mutex::new(None),
        })
    }

    /// Signed RS256 assertion issued at `iat` (unix seconds).
    pub fn assertion(&self, iat: i64) -> Result<String, AppendFailure> {
        let claims = Claims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        Ok(jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)?)
    }

    /// A valid access token, fetching a new one when the cached token is
    /// missing or close to expiry. Concurrent callers wait on one refresh.
    pub async fn access_token(&self) -> Result<String, AppendFailure> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch().await?;
        let value = fresh.access_token.clone();
        let lifetime = Duration::from_secs(fresh.expires_in).saturating_sub(EXPIRY_MARGIN);
        *cached = Some(CachedToken {
            value: fresh.access_token,
            refresh_at: Instant::now() + lifetime,
        });
        Ok(value)
    }

    async fn fetch(&self) -> Result<TokenResponse, AppendFailure> {
        let assertion = self.assertion(Utc::now().timestamp())?;
        log::debug!("Requesting access token for {}", self.client_email);

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppendFailure::Auth { status: status.as_u16(), body });
        }
        Ok(response.json::<TokenResponse>().await?)
    }
}
