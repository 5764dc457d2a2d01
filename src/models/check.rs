use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{AddressForm, ValidationResult};

/// JSON view of a finished address check.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CheckResponse {
    pub result: ValidationResult,
    /// Present whenever the result names a chain; empty when that chain has no known explorer.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub explorer_url: Option<String>,
}

impl CheckResponse {
    /// Builds the response from a submitted form, `None` if the form holds no result.
    pub fn from_form(form: &AddressForm) -> Option<Self> {
        let result = form.result.clone()?;
        Some(Self {
            result,
            explorer_url: form.explorer_link(),
        })
    }
}
