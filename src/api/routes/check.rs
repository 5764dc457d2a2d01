//! JSON endpoint for checking an address without the HTML page.
use crate::{
    api::controllers::address,
    models::{ApiResponse, AppState, CheckResponse, ValidationRequest},
};
use actix_web::{post, web, Responder};

/// Validates an address and resolves its explorer link.
///
/// Service failures are reported inside the result (`status: "error"`), not as HTTP errors.
#[utoipa::path(
    post,
    path = "/api/check",
    tag = "Address",
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Check finished", body = ApiResponse<CheckResponse>),
        (status = 400, description = "Empty address", body = ApiResponse<String>),
    )
)]
#[post("/api/check")]
async fn check_address(
    request: web::Json<ValidationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    address::check_address(request.into_inner(), data).await
}

/// Initializes the check route.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(check_address);
}
