use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::ERROR_STATUS;

/// Payload sent to the validation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationRequest {
    pub address: String,
    /// Optional chain hint; omitted from the payload when not set so the
    /// service auto-detects the chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub blockchain: Option<String>,
}

impl ValidationRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            blockchain: None,
        }
    }

    pub fn with_blockchain(mut self, blockchain: Option<String>) -> Self {
        self.blockchain = blockchain.filter(|chain| !chain.is_empty());
        self
    }
}

/// Outcome reported by the validation service, or synthesized locally on failure.
///
/// Treated as an opaque record: whichever fields are present get displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub blockchain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            blockchain: None,
            error: Some(message.into()),
        }
    }

    /// Detected chain, if the service reported a non-empty one.
    pub fn blockchain(&self) -> Option<&str> {
        self.blockchain.as_deref().filter(|chain| !chain.is_empty())
    }

    /// Error text, if present and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}
