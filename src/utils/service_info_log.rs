//! This module contains the function to log service information at startup.
use log::info;
use std::env;

use crate::config::ServerConfig;

/// Logs service information at startup
pub fn log_service_info(config: &ServerConfig) {
    info!("=== Crypto Address Checker Starting ===");
    info!(
        "service: {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("platform: {} ({})", env::consts::OS, env::consts::ARCH);

    if let Ok(cwd) = env::current_dir() {
        info!("working directory: {}", cwd.display());
    }

    info!("validation endpoint: {}", config.validation_api_url);
    info!(
        "started at: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
