//! # MyGLS Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-based client for the MyGLS ParcelService API
//! - Credential hashing for the carrier's authentication scheme
//! - Configuration loading (environment variables and files)
//!
//! ## Architecture
//! - Implements traits defined in `mygls-core`
//! - Depends on `mygls-domain` and `mygls-core`
//! - Contains all "impure" code (network I/O, process environment)

pub mod api;
pub mod config;

// Re-export commonly used items
pub use api::client::GlsApiClient;
pub use api::credentials::sha512_digest;
