use actix_web::{HttpResponse, web};

use crate::config::FormOptions;
use crate::errors::AppError;
use crate::forms::audit::AUDIT_SHEET;
use crate::forms::{AuditRequestSubmission, parse_body};
use crate::responses::ApiMessage;
use crate::sheets::SheetAppender;

/// POST /api/audit-requests - Append an audit request to the sheet
pub async fn submit(
    sheets: web::Data<dyn SheetAppender>,
    options: web::Data<FormOptions>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mut submission = parse_body(&body)
        .and_then(|value| AuditRequestSubmission::from_json(&value))
        .inspect_err(|e| log::warn!("Audit request rejected: {:?}", e.paths()))?;

    if options.normalize_website {
        submission = submission.with_canonical_website();
    }

    sheets.append_row(AUDIT_SHEET, submission.to_row()).await?;

    log::info!(
        "Audit request for {} from {} appended to {AUDIT_SHEET:?}",
        submission.website,
        submission.email
    );
    Ok(HttpResponse::Created().json(ApiMessage::new("Audit request received successfully")))
}
