//! Host-side order types
//!
//! Mirrors the fields the commerce framework exposes on an order. The host
//! persists and validates these; the adapter only reads them.

use serde::{Deserialize, Serialize};

/// Shipping address attached to an order by the host checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub street_line1: String,
    pub city: String,
    pub postal_code: String,
    pub country_code: String,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The slice of the host's order entity the adapter consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable order code, used as the carrier client reference.
    pub code: String,
    pub shipping_address: ShippingAddress,
}
