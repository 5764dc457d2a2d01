//! End-to-end tests of the JSON check API.
use actix_web::{http::StatusCode, test, web, App};
use crypto_address_checker::api::routes;
use serde_json::{json, Value};

use crate::integration::common::{app_state, start_validator, validation_url};

#[actix_web::test]
async fn test_check_api_resolves_explorer_case_insensitively() {
    let server = start_validator(200, json!({ "status": "valid", "blockchain": "ETHEREUM" }), 1).await;
    let app = test::init_service(
        App::new()
            .app_data(app_state(validation_url(&server)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/check")
        .set_json(json!({ "address": "0xabc" }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["explorer_url"], "https://etherscan.io/address/0xabc");
}

#[actix_web::test]
async fn test_unknown_path_is_not_found() {
    let server = start_validator(200, json!({ "status": "valid" }), 0).await;
    let app = test::init_service(
        App::new()
            .app_data(app_state(validation_url(&server)))
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found)),
    )
    .await;

    let req = test::TestRequest::get().uri("/validate").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not Found: /validate");
}
