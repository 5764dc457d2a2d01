//! Serves the generated OpenAPI document.
use crate::openapi::ApiDoc;
use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;

#[get("/api/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Initializes the OpenAPI document route.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
