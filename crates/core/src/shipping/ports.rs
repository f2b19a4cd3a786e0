//! Carrier integration port interfaces

use async_trait::async_trait;
use mygls_domain::{Parcel, PrintLabelsResponse, Result};

/// Trait for the carrier's label-printing endpoint.
///
/// The infrastructure layer provides the HTTP implementation; tests inject
/// in-memory substitutes.
#[async_trait]
pub trait LabelService: Send + Sync {
    /// Submit parcels for label printing and return the carrier's response.
    async fn print_labels(&self, parcels: &[Parcel]) -> Result<PrintLabelsResponse>;
}
