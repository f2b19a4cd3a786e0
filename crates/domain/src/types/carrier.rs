//! Wire types for the MyGLS ParcelService JSON API
//!
//! Field names follow the carrier's PascalCase schema; serde renames keep
//! the Rust side idiomatic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pickup or delivery address in the carrier's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlsAddress {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub city: String,
    pub zip_code: String,
    pub country_iso_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// One shippable unit submitted to the carrier.
///
/// Constructed fresh per shipment request; never mutated or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parcel {
    pub client_number: i64,
    /// Order identifier the carrier echoes back on labels and errors.
    pub client_reference: String,
    pub count: u32,
    pub content: String,
    pub pickup_date: DateTime<Utc>,
    pub pickup_address: GlsAddress,
    pub delivery_address: GlsAddress,
    pub service_list: Vec<ParcelService>,
}

/// Additional carrier service attached to a parcel (cash-on-delivery,
/// insurance, ...). The adapter currently never attaches any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParcelService {
    pub code: String,
}

/// Authenticated envelope for the PrintLabels endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrintLabelsRequest {
    pub username: String,
    /// SHA-512 digest of the account password, transmitted as a byte array.
    pub password: Vec<u8>,
    pub client_number_list: Vec<i64>,
    pub webshop_engine: String,
    pub parcel_list: Vec<Parcel>,
    pub type_of_printer: String,
    pub show_print_dialog: bool,
}

/// Carrier response to a PrintLabels call.
///
/// The error list is the only field the adapter inspects; everything else
/// the carrier returns is kept in `extra` and handed back to the caller
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrintLabelsResponse {
    /// Rendered label document bytes, when the carrier returns them inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_labels_error_list: Option<Vec<PrintLabelsError>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PrintLabelsResponse {
    /// Carrier-side errors reported in the response body, if any.
    pub fn errors(&self) -> &[PrintLabelsError] {
        self.print_labels_error_list.as_deref().unwrap_or_default()
    }
}

/// One entry of the carrier's error list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrintLabelsError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_reference_list: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
