use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use super::error::AppendFailure;
use super::token::ServiceAccountTokens;
use super::{SheetAppender, append_range};
use crate::config::SheetsSettings;

/// Google Sheets v4 client bound to one spreadsheet.
///
/// Build once and share: the HTTP connection pool and access token are reused
/// across requests.
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    api_base: Url,
    spreadsheet_id: String,
    tokens: ServiceAccountTokens,
}

#[derive(Deserialize, Default)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Deserialize, Default)]
struct SheetMeta {
    #[serde(default)]
    properties: SheetProperties,
}

#[derive(Deserialize, Default)]
struct SheetProperties {
    #[serde(default)]
    title: String,
}

impl GoogleSheetsClient {
    pub fn new(settings: &SheetsSettings) -> Result<Self, AppendFailure> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("sheetforms/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let api_base = Url::parse(&settings.api_base).map_err(|e| {
            AppendFailure::Credentials(format!("invalid API base {:?}: {e}", settings.api_base))
        })?;
        let tokens = ServiceAccountTokens::new(
            &settings.client_email,
            &settings.private_key,
            &settings.token_uri,
            http.clone(),
        )?;
        Ok(GoogleSheetsClient {
            http,
            api_base,
            spreadsheet_id: settings.spreadsheet_id.clone(),
            tokens,
        })
    }

    /// `{base}/v4/spreadsheets/{id}` followed by `extra` path segments.
    fn spreadsheet_url(&self, extra: &[&str]) -> Result<Url, AppendFailure> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppendFailure::Credentials("API base URL cannot carry a path".to_string())
            })?;
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str()])
                .extend(extra);
        }
        Ok(url)
    }

    fn append_url(&self, range: &str) -> Result<Url, AppendFailure> {
        let target = format!("{range}:append");
        let mut url = self.spreadsheet_url(&["values", target.as_str()])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppendFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppendFailure::Api { status: status.as_u16(), body })
}

#[async_trait]
impl SheetAppender for GoogleSheetsClient {
    async fn append_row(&self, sheet: &str, values: Vec<String>) -> Result<(), AppendFailure> {
        let range = append_range(sheet, values.len());
        let url = self.append_url(&range)?;
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "values": [values] }))
            .send()
            .await?;
        ensure_success(response).await?;

        log::debug!("Appended row to {range}");
        Ok(())
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, AppendFailure> {
        let mut url = self.spreadsheet_url(&[])?;
        url.query_pairs_mut().append_pair("fields", "sheets.properties.title");
        let token = self.tokens.access_token().await?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let meta: SpreadsheetMeta = ensure_success(response).await?.json().await?;
        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }
}
