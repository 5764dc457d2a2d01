use std::env;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_VALIDATION_API_URL};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Full URL of the external validation endpoint.
    pub validation_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            validation_api_url: env::var("VALIDATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_VALIDATION_API_URL.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            validation_api_url: DEFAULT_VALIDATION_API_URL.to_string(),
        }
    }
}
