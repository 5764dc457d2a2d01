//! Routes serving the address form page.
use crate::{
    api::controllers::address,
    models::{AddressFormInput, AppState},
};
use actix_web::{get, post, web, Responder};

/// Renders the empty address form.
#[get("/")]
async fn index() -> impl Responder {
    address::show_form().await
}

/// Validates the submitted address and renders the page with the result.
#[post("/")]
async fn submit(form: web::Form<AddressFormInput>, data: web::Data<AppState>) -> impl Responder {
    address::submit_form(form.into_inner(), data).await
}

/// Initializes the page routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(submit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationResult;
    use crate::services::{MockValidationServiceTrait, ValidationServiceError};
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn app_state(service: MockValidationServiceTrait) -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(service)))
    }

    async fn body_of(resp: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_index_renders_empty_form() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(MockValidationServiceTrait::new()))
                .configure(init),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_of(resp).await;
        assert!(body.contains("Crypto Address Checker"));
        assert!(!body.contains("Validation Result"));
    }

    #[actix_web::test]
    async fn test_submit_empty_address_shows_local_error() {
        let mut service = MockValidationServiceTrait::new();
        service.expect_validate().never();
        let app =
            test::init_service(App::new().app_data(app_state(service)).configure(init)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("address", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_of(resp).await;
        assert!(body.contains(r#"<div class="error-message">Address field cannot be empty</div>"#));
        assert!(!body.contains("Validation Result"));
    }

    #[actix_web::test]
    async fn test_submit_valid_address_renders_explorer() {
        let mut service = MockValidationServiceTrait::new();
        service
            .expect_validate()
            .withf(|request| request.address == "0xabc" && request.blockchain.is_none())
            .times(1)
            .returning(|_| {
                Ok(ValidationResult {
                    status: "valid".to_string(),
                    blockchain: Some("Ethereum".to_string()),
                    error: None,
                })
            });
        let app =
            test::init_service(App::new().app_data(app_state(service)).configure(init)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("address", "0xabc"), ("blockchain", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body = body_of(resp).await;
        assert!(body.contains("Status: valid"));
        assert!(body.contains(r#"href="https://etherscan.io/address/0xabc""#));
        assert!(body.contains(r#"value="0xabc""#));
    }

    #[actix_web::test]
    async fn test_submit_service_failure_renders_error_result() {
        let mut service = MockValidationServiceTrait::new();
        service.expect_validate().times(1).returning(|_| {
            Err(ValidationServiceError::Transport(
                "connection refused".to_string(),
            ))
        });
        let app =
            test::init_service(App::new().app_data(app_state(service)).configure(init)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("address", "0xabc")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_of(resp).await;
        assert!(body.contains("Status: error"));
        assert!(body.contains("Error: An error occurred while validating the address"));
        assert!(!body.contains("Blockchain Explorer"));
    }
}
