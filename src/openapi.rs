use crate::{
    api::routes::{check, health},
    models,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    tags((name = "Crypto Address Checker API")),
    info(
        description = "Checks crypto addresses against the validation service and links them to block explorers",
        version = "0.1.0",
        title = "Crypto Address Checker API"
    ),
    paths(check::check_address, health::health_check),
    components(schemas(
        models::ValidationRequest,
        models::ValidationResult,
        models::CheckResponse
    ))
)]
pub struct ApiDoc;
