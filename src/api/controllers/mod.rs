//! # API Controllers Module
//!
//! Handles HTTP request processing behind the routes.
//!
//! ## Controllers
//!
//! * `address` - Address check flow for the HTML page and the JSON API
//! * `health` - Liveness endpoint

pub mod address;
pub mod health;
