//! # API Module
//!
//! Contains the HTTP surface of the address checker.
//!
//! ## Structure
//!
//! * `controllers` - Request handling
//! * `routes` - Endpoint definitions and routing

pub mod controllers;

pub mod routes;
