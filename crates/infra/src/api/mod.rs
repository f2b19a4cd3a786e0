//! MyGLS ParcelService API client

pub mod client;
pub mod credentials;

pub use client::GlsApiClient;
