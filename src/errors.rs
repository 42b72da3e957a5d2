use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::forms::ValidationError;
use crate::responses::{ApiMessage, ApiValidationResponse};
use crate::sheets::AppendFailure;

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    MethodNotAllowed,
    Append(AppendFailure),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{e}"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Append(e) => write!(f, "Append failed: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Append(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(e) => HttpResponse::BadRequest().json(ApiValidationResponse {
                message: "Validation error".to_string(),
                errors: e.issues.clone(),
            }),
            AppError::MethodNotAllowed => {
                HttpResponse::MethodNotAllowed().json(ApiMessage::new("Method not allowed"))
            }
            AppError::Append(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(ApiMessage::new("Internal server error"))
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<AppendFailure> for AppError {
    fn from(e: AppendFailure) -> Self {
        AppError::Append(e)
    }
}
