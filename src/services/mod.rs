//! # Services Module
//!
//! Integrations with external services.

mod validation;
pub use validation::*;
