use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::config::FormOptions;
use crate::errors::AppError;
use crate::forms::contact::CONTACT_SHEET;
use crate::forms::{ContactSubmission, parse_body};
use crate::responses::ApiMessage;
use crate::sheets::SheetAppender;

/// POST /api/contact - Append a contact form submission to the sheet
pub async fn submit(
    sheets: web::Data<dyn SheetAppender>,
    options: web::Data<FormOptions>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let submission = parse_body(&body)
        .and_then(|value| ContactSubmission::from_json(&value))
        .inspect_err(|e| log::warn!("Contact form rejected: {:?}", e.paths()))?;

    let submitted_at = options.contact_timestamp.then(Utc::now);
    sheets
        .append_row(CONTACT_SHEET, submission.to_row(submitted_at))
        .await?;

    log::info!("Contact form from {} appended to {CONTACT_SHEET:?}", submission.email);
    Ok(HttpResponse::Created().json(ApiMessage::new("Contact form submitted successfully")))
}
