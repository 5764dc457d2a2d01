//! Shared helpers for integration tests.
use std::sync::Arc;

use actix_web::web;
use crypto_address_checker::{config::ServerConfig, models::AppState, services::ValidationService};
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Starts a validation service stub answering every POST to `/validate` with `status`/`body`.
pub async fn start_validator(status: u16, body: Value, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

pub fn validation_url(server: &MockServer) -> String {
    format!("{}/validate", server.uri())
}

/// App state wired like the binary, pointed at `validation_api_url`.
pub fn app_state(validation_api_url: String) -> web::Data<AppState> {
    let config = ServerConfig {
        validation_api_url,
        ..ServerConfig::default()
    };
    let service = ValidationService::new(&config).expect("validation service");
    web::Data::new(AppState::new(Arc::new(service)))
}
