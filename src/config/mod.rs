//! Runtime configuration for the address checker.

mod server_config;
pub use server_config::*;
