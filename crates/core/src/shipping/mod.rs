//! Shipment creation and shipping-method eligibility

pub mod eligibility;
pub mod ports;
pub mod service;

pub use service::ShipmentService;
