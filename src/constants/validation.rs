//! Validation endpoint defaults and the user-facing messages of the check flow.

/// Validation service endpoint used when `VALIDATION_API_URL` is not set.
pub const DEFAULT_VALIDATION_API_URL: &str = "http://localhost:8080/validate";

/// Shown when the submitted address is empty or whitespace.
pub const EMPTY_ADDRESS_MESSAGE: &str = "Address field cannot be empty";

/// Fallback when the service fails without a usable message.
pub const GENERIC_VALIDATION_ERROR_MESSAGE: &str =
    "An error occurred while validating the address";

/// Fallback for failures outside the HTTP exchange itself.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Status reported on synthesized failure results.
pub const ERROR_STATUS: &str = "error";
