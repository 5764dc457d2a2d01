//! # Validation Service Module
//!
//! Dispatches addresses to the external validation endpoint and decodes its verdict.
//!
//! ## Architecture
//!
//! ```text
//! ValidationService (implements ValidationServiceTrait)
//!   ├── POST <validation_api_url> {"address": ...}
//!   ├── 2xx  -> ValidationResult decoded from the body
//!   └── else -> ValidationServiceError (mapped to an "error" ValidationResult)
//! ```
//!
//! No retries and no timeout: exactly one request is issued per call.
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use thiserror::Error;

use crate::config::ServerConfig;
use crate::constants::{GENERIC_VALIDATION_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use crate::models::{ValidationRequest, ValidationResult};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationServiceError {
    /// The service answered with a non-success status.
    #[error("Validation service returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// No complete response was received (connection refused, DNS, malformed URL, body cut off).
    #[error("HTTP error: {0}")]
    Transport(String),

    /// A success response whose body is not a validation result.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<&ValidationServiceError> for ValidationResult {
    fn from(err: &ValidationServiceError) -> Self {
        match err {
            ValidationServiceError::Status {
                message: Some(message),
                ..
            } => ValidationResult::error(message.clone()),
            ValidationServiceError::Status { message: None, .. }
            | ValidationServiceError::Transport(_) => {
                ValidationResult::error(GENERIC_VALIDATION_ERROR_MESSAGE)
            }
            ValidationServiceError::Decode(_) | ValidationServiceError::ConfigError(_) => {
                ValidationResult::error(UNKNOWN_ERROR_MESSAGE)
            }
        }
    }
}

/// Result type for validation service operations
pub type ValidationServiceResult<T> = Result<T, ValidationServiceError>;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ValidationServiceTrait: Send + Sync {
    /// Sends one validation request and returns the service's verdict.
    async fn validate(&self, request: &ValidationRequest)
        -> ValidationServiceResult<ValidationResult>;
}

#[derive(Clone, Debug)]
pub struct ValidationService {
    url: String,
    client: Client,
}

impl ValidationService {
    pub fn new(config: &ServerConfig) -> Result<Self, ValidationServiceError> {
        let client = Client::builder().build().map_err(|e| {
            ValidationServiceError::ConfigError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            url: config.validation_api_url.clone(),
            client,
        })
    }

    /// Pulls a non-empty `message` string out of an error response body.
    fn error_message(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    }
}

#[async_trait]
impl ValidationServiceTrait for ValidationService {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> ValidationServiceResult<ValidationResult> {
        debug!("Sending validation request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Validation request failed: {}", e);
                ValidationServiceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = Self::error_message(&body);
            error!(
                "Validation service responded with {} (message: {:?})",
                status, message
            );
            return Err(ValidationServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // A body cut off mid-read is a transport failure, not a malformed verdict.
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read validation response body: {}", e);
            ValidationServiceError::Transport(e.to_string())
        })?;

        serde_json::from_slice::<ValidationResult>(&body).map_err(|e| {
            error!("Failed to decode validation response: {}", e);
            ValidationServiceError::Decode(e.to_string())
        })
    }
}
