//! Pigmatch - CIELAB pigment-to-order matching service.
//!
//! HTTP layer over the `lab-match` core: table storage, uploads and the
//! match endpoint. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
