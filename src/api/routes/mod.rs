//! # API Routes Module
//!
//! Configures HTTP routes for the address checker.
//!
//! ## Routes
//!
//! * `/` - Address form page (GET) and form submission (POST)
//! * `/api/check` - JSON address check
//! * `/api/openapi.json` - OpenAPI document
//! * `/health` - Health check endpoint

pub mod check;
pub mod health;
pub mod openapi_doc;
pub mod page;

use actix_web::{web, HttpRequest};

use crate::models::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(page::init)
        .configure(check::init)
        .configure(openapi_doc::init);
}

/// Fallback for unmatched paths.
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::NotFound(req.path().to_string()))
}
