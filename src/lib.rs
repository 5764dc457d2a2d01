//! # Crypto Address Checker
//!
//! Single-page web form that sends a crypto address to an external validation
//! service, shows the verdict and links the address to a matching block explorer.

pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod services;
pub mod utils;
pub mod views;
