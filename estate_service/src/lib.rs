//! # Estate Service
//!
//! HTTP backend for the estate marketing site. Serves the listings index
//! with its search filters, books property viewings, records contact
//! inquiries, and estimates mortgage payments.
//!
//! The binary in `main.rs` wires configuration, telemetry, the estatedb
//! pool and migrations together, then hands off to
//! [`api::setup_and_serve`].

pub mod api;
pub mod config;
pub mod domain;
pub mod storage;
