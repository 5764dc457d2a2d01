use std::sync::Arc;

use actix_web::middleware::{self, Logger};
use actix_web::{web, App, HttpServer};
use color_eyre::Result;
use dotenvy::dotenv;
use eyre::WrapErr;
use log::info;

use crypto_address_checker::{
    api::routes,
    config::ServerConfig,
    constants::DEFAULT_SHUTDOWN_TIMEOUT_SECONDS,
    logging::setup_logging,
    models::AppState,
    services::ValidationService,
    utils::log_service_info,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file
    dotenv().ok();
    setup_logging();

    let config = ServerConfig::from_env();
    log_service_info(&config);

    let validation_service =
        ValidationService::new(&config).wrap_err("Failed to create validation service")?;
    let app_state = web::Data::new(AppState::new(Arc::new(validation_service)));

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await.wrap_err("Server terminated with an error")?;
    Ok(())
}
