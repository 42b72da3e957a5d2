use actix_web::{HttpResponse, web};

use crate::responses::ConnectionReport;
use crate::sheets::SheetAppender;

/// GET /api/test-connection - Check credentials by listing the spreadsheet's tabs
pub async fn test_connection(sheets: web::Data<dyn SheetAppender>) -> HttpResponse {
    match sheets.sheet_titles().await {
        Ok(titles) => HttpResponse::Ok().json(ConnectionReport {
            success: true,
            message: Some("Successfully connected to Google Sheets".to_string()),
            sheet_names: Some(titles),
            error: None,
        }),
        Err(e) => {
            log::error!("Connection test failed: {e}");
            HttpResponse::InternalServerError().json(ConnectionReport {
                success: false,
                message: None,
                sheet_names: None,
                error: Some(e.to_string()),
            })
        }
    }
}
