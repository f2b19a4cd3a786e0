//! HTTP client for the MyGLS ParcelService JSON API

use std::sync::Arc;

use async_trait::async_trait;
use mygls_core::LabelService;
use mygls_domain::{
    GlsConfig, GlsError, Parcel, PrintLabelsRequest, PrintLabelsResponse, Result,
};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for the carrier's label-printing endpoint.
///
/// Holds no mutable state; one instance may be shared across concurrent
/// shipment requests. No retry is attempted and no explicit timeout is
/// configured; a failed call surfaces to the caller immediately.
pub struct GlsApiClient {
    config: Arc<GlsConfig>,
    base_url: String,
    client: Client,
}

impl GlsApiClient {
    /// Create a client pointing at the configured country's MyGLS endpoint.
    pub fn new(config: Arc<GlsConfig>) -> Self {
        let base_url = format!("https://api.mygls.{}/ParcelService.svc/json", config.country);
        Self::with_base_url(config, base_url)
    }

    /// Create a client with an explicit API base URL.
    ///
    /// Tests point this at a local mock server; production code uses
    /// [`GlsApiClient::new`].
    pub fn with_base_url(config: Arc<GlsConfig>, base_url: impl Into<String>) -> Self {
        Self { config, base_url: base_url.into(), client: Client::new() }
    }

    /// Base URL this client submits requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the authenticated request envelope for the given parcels.
    fn request_body(&self, parcels: &[Parcel]) -> PrintLabelsRequest {
        PrintLabelsRequest {
            username: self.config.username.clone(),
            password: super::credentials::sha512_digest(&self.config.password).to_vec(),
            client_number_list: vec![self.config.client_number],
            webshop_engine: self.config.webshop_engine.clone(),
            parcel_list: parcels.to_vec(),
            type_of_printer: self.config.printer_type.clone(),
            show_print_dialog: false,
        }
    }
}

#[async_trait]
impl LabelService for GlsApiClient {
    async fn print_labels(&self, parcels: &[Parcel]) -> Result<PrintLabelsResponse> {
        let endpoint = format!("{}/PrintLabels", self.base_url);
        let body = self.request_body(parcels);

        debug!(%endpoint, parcels = parcels.len(), "Submitting print-labels request");

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GlsError::Network(format!("Print-labels request failed: {e}")))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received print-labels response");

        if !status.is_success() {
            warn!(status = status.as_u16(), "Carrier returned non-success status");
            return Err(GlsError::Transport { status: status.as_u16() });
        }

        response
            .json::<PrintLabelsResponse>()
            .await
            .map_err(|e| GlsError::Internal(format!("Failed to parse carrier response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mygls_domain::{CountryCode, GlsAddress, RawGlsConfig};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_config(country: CountryCode) -> Arc<GlsConfig> {
        Arc::new(
            RawGlsConfig {
                username: "webshop@example.com".to_string(),
                password: "secret".to_string(),
                client_number: 100123,
                country,
                printer_type: None,
                webshop_engine: None,
            }
            .resolve(),
        )
    }

    fn test_parcel() -> Parcel {
        let address = GlsAddress {
            name: "Ana Novak".to_string(),
            street: "Dunajska cesta 5".to_string(),
            house_number: "1".to_string(),
            city: "Ljubljana".to_string(),
            zip_code: "1000".to_string(),
            country_iso_code: "SI".to_string(),
            contact_email: None,
            contact_phone: None,
        };

        Parcel {
            client_number: 100123,
            client_reference: "ORD-4711".to_string(),
            count: 1,
            content: "Webshop order".to_string(),
            pickup_date: Utc::now(),
            pickup_address: address.clone(),
            delivery_address: address,
            service_list: Vec::new(),
        }
    }

    #[test]
    fn base_url_interpolates_country() {
        let client = GlsApiClient::new(test_config(CountryCode::Hr));
        assert!(client.base_url().contains("mygls.hr"));
        assert_eq!(client.base_url(), "https://api.mygls.hr/ParcelService.svc/json");

        let client = GlsApiClient::new(test_config(CountryCode::Si));
        assert!(client.base_url().contains("mygls.si"));
    }

    #[test]
    fn request_body_carries_digest_and_defaults() {
        let client = GlsApiClient::new(test_config(CountryCode::Si));
        let body = client.request_body(&[test_parcel()]);

        assert_eq!(body.username, "webshop@example.com");
        assert_eq!(body.password.len(), 64);
        assert_ne!(body.password, b"secret".to_vec());
        assert_eq!(body.client_number_list, vec![100123]);
        assert_eq!(body.webshop_engine, "Vendure");
        assert_eq!(body.type_of_printer, "A4_2x2");
        assert!(!body.show_print_dialog);
        assert_eq!(body.parcel_list.len(), 1);
    }

    #[tokio::test]
    async fn posts_envelope_with_carrier_field_names() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ParcelService.svc/json/PrintLabels"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "PrintLabelsErrorList": [] })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GlsApiClient::with_base_url(
            test_config(CountryCode::Si),
            format!("{}/ParcelService.svc/json", mock_server.uri()),
        );

        let response = client.print_labels(&[test_parcel()]).await.expect("request should succeed");
        assert!(response.errors().is_empty());

        let requests = mock_server.received_requests().await.expect("requests are recorded");
        let body: serde_json::Value =
            serde_json::from_slice(&requests[0].body).expect("request body must be JSON");

        assert_eq!(body["Username"], "webshop@example.com");
        assert_eq!(body["Password"].as_array().map(Vec::len), Some(64));
        assert_eq!(body["ClientNumberList"], serde_json::json!([100123]));
        assert_eq!(body["WebshopEngine"], "Vendure");
        assert_eq!(body["TypeOfPrinter"], "A4_2x2");
        assert_eq!(body["ShowPrintDialog"], false);
        assert_eq!(body["ParcelList"][0]["ClientReference"], "ORD-4711");
    }

    #[tokio::test]
    async fn non_success_status_becomes_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ParcelService.svc/json/PrintLabels"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = GlsApiClient::with_base_url(
            test_config(CountryCode::Si),
            format!("{}/ParcelService.svc/json", mock_server.uri()),
        );

        let err = client.print_labels(&[test_parcel()]).await.unwrap_err();

        assert!(matches!(err, GlsError::Transport { status: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn unreachable_server_becomes_network_error() {
        // Closed port; the connection is refused before any status exists.
        let client = GlsApiClient::with_base_url(
            test_config(CountryCode::Si),
            "http://localhost:9/ParcelService.svc/json",
        );

        let err = client.print_labels(&[test_parcel()]).await.unwrap_err();
        assert!(matches!(err, GlsError::Network(_)));
    }

    #[tokio::test]
    async fn unparseable_body_becomes_internal_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ParcelService.svc/json/PrintLabels"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = GlsApiClient::with_base_url(
            test_config(CountryCode::Si),
            format!("{}/ParcelService.svc/json", mock_server.uri()),
        );

        let err = client.print_labels(&[test_parcel()]).await.unwrap_err();
        assert!(matches!(err, GlsError::Internal(_)));
    }
}
