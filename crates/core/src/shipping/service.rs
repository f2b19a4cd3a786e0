//! Shipment service: maps one host order into one carrier parcel

use std::sync::Arc;

use chrono::Utc;
use mygls_domain::constants::PARCEL_CONTENT;
use mygls_domain::{GlsAddress, GlsConfig, GlsError, Order, Parcel, PrintLabelsResponse, Result};
use tracing::{info, warn};

use super::ports::LabelService;

/// Creates shipments for host orders through the carrier port.
///
/// Stateless apart from the shared read-only configuration; one instance
/// may serve concurrent shipment requests.
pub struct ShipmentService {
    config: Arc<GlsConfig>,
    labels: Arc<dyn LabelService>,
}

impl ShipmentService {
    pub fn new(config: Arc<GlsConfig>, labels: Arc<dyn LabelService>) -> Self {
        Self { config, labels }
    }

    /// Create a shipment for one order: build the parcel, submit it, and
    /// surface any carrier-side errors.
    ///
    /// # Errors
    /// Propagates transport failures from the carrier port unchanged.
    /// Returns [`GlsError::Carrier`] when the carrier accepted the call but
    /// reported a non-empty error list; the serialized list is carried as
    /// the error detail.
    pub async fn create_shipment(&self, order: &Order) -> Result<PrintLabelsResponse> {
        let parcel = self.build_parcel(order);
        let response = self.labels.print_labels(std::slice::from_ref(&parcel)).await?;

        if !response.errors().is_empty() {
            let details = serde_json::to_string(response.errors()).map_err(|e| {
                GlsError::Internal(format!("Failed to serialize carrier error list: {e}"))
            })?;
            warn!(order_code = %order.code, %details, "Carrier rejected label request");
            return Err(GlsError::Carrier { details });
        }

        info!(order_code = %order.code, "Carrier accepted label request");
        Ok(response)
    }

    fn build_parcel(&self, order: &Order) -> Parcel {
        let address = &order.shipping_address;

        Parcel {
            client_number: self.config.client_number,
            client_reference: order.code.clone(),
            count: 1,
            content: PARCEL_CONTENT.to_string(),
            pickup_date: Utc::now(),
            pickup_address: pickup_address(),
            delivery_address: GlsAddress {
                name: format!("{} {}", address.first_name, address.last_name),
                street: address.street_line1.clone(),
                // The street line is not parsed; the carrier schema requires
                // a house number, so a placeholder is sent.
                house_number: "1".to_string(),
                city: address.city.clone(),
                zip_code: address.postal_code.clone(),
                country_iso_code: address.country_code.clone(),
                contact_email: address.email_address.clone(),
                contact_phone: address.phone_number.clone(),
            },
            service_list: Vec::new(),
        }
    }
}

/// The shipper's own registered address. Fixed in this version.
fn pickup_address() -> GlsAddress {
    GlsAddress {
        name: "Your Company d.o.o.".to_string(),
        street: "Main street".to_string(),
        house_number: "1".to_string(),
        city: "Ljubljana".to_string(),
        zip_code: "1000".to_string(),
        country_iso_code: "SI".to_string(),
        contact_email: None,
        contact_phone: None,
    }
}
