//! Route table

use crate::handlers::{configure_calls, configure_ranges, configure_usage, health_check};
use actix_web::{web, HttpRequest, HttpResponse};
use callmeter_core::AppError;
use serde_json::json;

/// Configure API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Health check
            .route("/health", web::get().to(health_check))
            // Usage against plan quota
            .configure(configure_usage)
            // Date-filtered call lists
            .configure(configure_calls)
            // Range selector metadata
            .configure(configure_ranges)
            .default_service(web::to(not_found)),
    );
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}

/// JSON body extractor config that reports errors in the API error shape
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let error_message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({
                    "error": "invalid_body",
                    "message": error_message,
                    "status": 400,
                })),
            )
            .into()
        })
}
