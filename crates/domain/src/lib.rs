//! # MyGLS Domain
//!
//! Business domain types for the MyGLS shipping adapter.
//!
//! This crate contains:
//! - Carrier wire types (parcels, addresses, request/response envelopes)
//! - Host-side order types as supplied by the commerce framework
//! - Adapter error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other mygls crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
