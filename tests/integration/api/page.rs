//! End-to-end tests of the HTML form flow.
use actix_web::{test, web, App};
use crypto_address_checker::api::routes;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::integration::common::{app_state, start_validator, validation_url};

async fn submit(state: web::Data<crypto_address_checker::models::AppState>, address: &str) -> String {
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("address", address)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_valid_ethereum_address_links_to_etherscan() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/validate"))
        .and(body_json(json!({ "address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "valid", "blockchain": "ethereum" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = submit(
        app_state(validation_url(&server)),
        "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
    )
    .await;

    assert!(body.contains("Validation Result"));
    assert!(body.contains("Blockchain Explorer"));
    assert!(body.contains(
        r#"href="https://etherscan.io/address/0x71C7656EC7ab88b098defB751B7401B5f6d8976F""#
    ));
}

#[actix_web::test]
async fn test_unknown_chain_renders_empty_explorer_link() {
    let server = start_validator(
        200,
        json!({ "status": "valid", "blockchain": "unknownchain" }),
        1,
    )
    .await;

    let body = submit(app_state(validation_url(&server)), "some-address").await;

    assert!(body.contains("Blockchain Explorer"));
    assert!(body.contains(r#"<a href="" target="_blank""#));
}

#[actix_web::test]
async fn test_invalid_address_shows_service_error() {
    let server = start_validator(
        200,
        json!({ "status": "invalid", "error": "bad checksum" }),
        1,
    )
    .await;

    let body = submit(app_state(validation_url(&server)), "0xdeadbeef").await;

    assert!(body.contains("Error: bad checksum"));
    assert!(!body.contains("Blockchain Explorer"));
}

#[actix_web::test]
async fn test_rejected_request_without_message_shows_generic_error() {
    let server = start_validator(
        400,
        json!({ "status": "invalid", "error": "Invalid address format" }),
        1,
    )
    .await;

    let body = submit(app_state(validation_url(&server)), "nonsense").await;

    assert!(body.contains("Status: error"));
    assert!(body.contains("Error: An error occurred while validating the address"));
}

#[actix_web::test]
async fn test_unreachable_service_shows_generic_error() {
    let server = MockServer::start().await;
    let url = validation_url(&server);
    drop(server);

    let body = submit(app_state(url), "0xabc").await;

    assert!(body.contains("Error: An error occurred while validating the address"));
}

#[actix_web::test]
async fn test_whitespace_address_never_reaches_service() {
    let server = start_validator(200, json!({ "status": "valid" }), 0).await;

    let body = submit(app_state(validation_url(&server)), " \t ").await;

    assert!(body.contains("Address field cannot be empty"));
    assert!(!body.contains("Validation Result"));
}

#[actix_web::test]
async fn test_index_form_disables_submit_while_posting() {
    let server = start_validator(200, json!({ "status": "valid" }), 0).await;
    let app = test::init_service(
        App::new()
            .app_data(app_state(validation_url(&server)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

    let form_tag = body
        .split("<form ")
        .nth(1)
        .and_then(|rest| rest.split('>').next())
        .expect("page renders a form");
    assert!(form_tag.contains(r#"method="post""#));
    assert!(form_tag.contains("onsubmit=\""));
    assert!(form_tag.contains("b.disabled=true;"));
    assert!(form_tag.contains("b.textContent='Validating...';"));
    assert!(body.contains(r#"<button type="submit">Validate</button>"#));
}
