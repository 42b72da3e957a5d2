//! Shared test infrastructure for HTTP-level tests.
//!
//! - `RecordingSheets` - in-memory `SheetAppender` that records every append
//! - `test_app!` - initialised actix test service wired like `main`

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sheetforms::sheets::{AppendFailure, SheetAppender};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CONTACT_SHEET: &str = "Contact Form";
pub const AUDIT_SHEET: &str = "Audit Requests";

// ============================================================================
// FAKE APPENDER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendCall {
    pub sheet: String,
    pub values: Vec<String>,
}

/// Records appends instead of calling Google. Optionally fails every call
/// with a fixed API status to exercise the 500 path.
#[derive(Default)]
pub struct RecordingSheets {
    calls: Mutex<Vec<AppendCall>>,
    fail_status: Option<u16>,
    titles: Vec<String>,
}

impl RecordingSheets {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingSheets {
            titles: vec![CONTACT_SHEET.to_string(), AUDIT_SHEET.to_string()],
            ..Default::default()
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(RecordingSheets {
            fail_status: Some(status),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<AppendCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SheetAppender for RecordingSheets {
    async fn append_row(&self, sheet: &str, values: Vec<String>) -> Result<(), AppendFailure> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(AppendCall { sheet: sheet.to_string(), values });
        match self.fail_status {
            Some(status) => Err(AppendFailure::Api {
                status,
                body: "quota exceeded".to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, AppendFailure> {
        match self.fail_status {
            Some(status) => Err(AppendFailure::Api {
                status,
                body: "permission denied".to_string(),
            }),
            None => Ok(self.titles.clone()),
        }
    }
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Build the test service around a `RecordingSheets` and `FormOptions`.
/// Import with `#[macro_use] mod common;`.
macro_rules! test_app {
    ($sheets:expr) => {
        test_app!($sheets, ::sheetforms::config::FormOptions::default())
    };
    ($sheets:expr, $options:expr) => {{
        let sheets: ::std::sync::Arc<dyn ::sheetforms::sheets::SheetAppender> = $sheets.clone();
        ::actix_web::test::init_service(
            ::actix_web::App::new()
                .wrap(::sheetforms::handlers::cors_headers())
                .app_data(::actix_web::web::Data::from(sheets))
                .app_data(::actix_web::web::Data::new($options))
                .configure(::sheetforms::handlers::configure),
        )
        .await
    }};
}

/// Build a JSON POST request for `uri`.
pub fn post_json(uri: &str, body: serde_json::Value) -> actix_web::test::TestRequest {
    actix_web::test::TestRequest::post()
        .uri(uri)
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body.to_string())
}
