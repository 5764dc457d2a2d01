//! Address check controller.
//!
//! Drives [`AddressForm::submit`] for both the HTML form and the JSON API.
use actix_web::{http::header::ContentType, web, HttpResponse};
use chrono::{Datelike, Utc};
use log::{info, warn};

use crate::{
    constants::EMPTY_ADDRESS_MESSAGE,
    models::{
        AddressForm, AddressFormInput, ApiError, ApiResponse, AppState, CheckResponse,
        ValidationRequest,
    },
    views::render_page,
};

fn page_response(form: &AddressForm) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(form, Utc::now().year()))
}

/// Renders the empty form.
pub async fn show_form() -> Result<HttpResponse, ApiError> {
    Ok(page_response(&AddressForm::default()))
}

/// Handles a form submission and renders the resulting page.
///
/// Local and service errors are part of the page, so this always answers `200 OK`.
pub async fn submit_form(
    input: AddressFormInput,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let mut form = AddressForm::from(input);
    form.submit(state.validation_service.as_ref()).await;

    if let Some(error) = &form.error {
        warn!("Rejected address submission: {}", error);
    }

    Ok(page_response(&form))
}

/// Checks an address and returns the result with its explorer link as JSON.
pub async fn check_address(
    request: ValidationRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let mut form = AddressForm {
        blockchain: request.blockchain,
        ..AddressForm::new(request.address)
    };
    form.submit(state.validation_service.as_ref()).await;

    let response = CheckResponse::from_form(&form)
        .ok_or_else(|| ApiError::BadRequest(EMPTY_ADDRESS_MESSAGE.to_string()))?;
    info!("Address check result: {}", response.result.status);

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
