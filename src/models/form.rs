//! State of one address form instance and the submit flow that drives it.
use log::info;
use serde::Deserialize;

use crate::constants::EMPTY_ADDRESS_MESSAGE;
use crate::models::{explorer_url, ValidationRequest, ValidationResult};
use crate::services::ValidationServiceTrait;

/// Fields posted by the HTML form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFormInput {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub blockchain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressForm {
    pub address: String,
    /// Optional chain hint forwarded to the validation service.
    pub blockchain: Option<String>,
    pub result: Option<ValidationResult>,
    /// Local validation error; never comes from the network.
    pub error: Option<String>,
    pub is_loading: bool,
}

impl From<AddressFormInput> for AddressForm {
    fn from(input: AddressFormInput) -> Self {
        Self {
            address: input.address,
            blockchain: input.blockchain.filter(|chain| !chain.is_empty()),
            ..Self::default()
        }
    }
}

impl AddressForm {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Rejects an empty (or whitespace-only) address; clears any earlier local error otherwise.
    pub fn validate_inputs(&mut self) -> bool {
        if self.address.trim().is_empty() {
            self.error = Some(EMPTY_ADDRESS_MESSAGE.to_string());
            return false;
        }
        self.error = None;
        true
    }

    pub fn request(&self) -> ValidationRequest {
        ValidationRequest::new(self.address.clone()).with_blockchain(self.blockchain.clone())
    }

    /// Runs one submission: local check, then a single validation request.
    ///
    /// A rejected submission leaves the previous result in place and never
    /// reaches the service.
    pub async fn submit(&mut self, service: &dyn ValidationServiceTrait) {
        if !self.validate_inputs() {
            return;
        }

        self.is_loading = true;
        self.result = None;

        let result = match service.validate(&self.request()).await {
            Ok(result) => result,
            Err(err) => ValidationResult::from(&err),
        };
        info!(
            "Address check finished with status {} (blockchain: {:?})",
            result.status, result.blockchain
        );

        self.result = Some(result);
        self.is_loading = false;
    }

    /// Explorer link for the current result.
    ///
    /// `None` when there is nothing to link; `Some("")` when the chain has no known explorer.
    pub fn explorer_link(&self) -> Option<String> {
        let blockchain = self.result.as_ref()?.blockchain()?;
        Some(explorer_url(blockchain, &self.address))
    }
}
