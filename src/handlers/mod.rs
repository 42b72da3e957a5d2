pub mod audit_requests;
pub mod contact;
pub mod diagnostics;

use actix_web::{HttpResponse, http::Method, middleware::DefaultHeaders, web};

use crate::errors::AppError;

/// Headers attached to every response so browser clients on other origins
/// can call the API directly.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add((
            "Access-Control-Allow-Headers",
            "X-Requested-With, Accept, Content-Type, Content-Length, Origin",
        ))
}

/// Pre-flight answer: 200, no body. CORS headers come from [`cors_headers`].
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

fn options() -> actix_web::Route {
    web::route().method(Method::OPTIONS)
}

/// Configure the form and diagnostic routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/contact")
            .route(web::post().to(contact::submit))
            .route(options().to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
    cfg.service(
        web::resource("/api/audit-requests")
            .route(web::post().to(audit_requests::submit))
            .route(options().to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
    cfg.service(
        web::resource("/api/test-connection")
            .route(web::get().to(diagnostics::test_connection))
            .route(options().to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}
