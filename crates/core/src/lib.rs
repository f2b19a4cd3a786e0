//! # MyGLS Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The shipment service that maps host orders into carrier parcels
//! - Port/adapter interfaces (traits) for the carrier endpoint
//! - The shipping-method eligibility checker
//!
//! ## Architecture Principles
//! - Only depends on `mygls-domain`
//! - No HTTP or platform code
//! - All external calls go through traits

pub mod shipping;

// Re-export specific items to avoid ambiguity
pub use shipping::eligibility::EligibilityChecker;
pub use shipping::ports::LabelService;
pub use shipping::ShipmentService;
