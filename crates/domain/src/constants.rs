//! Domain constants
//!
//! Centralized location for the fixed values the adapter submits to the
//! carrier.

/// Printer layout sent when the configuration does not name one.
pub const DEFAULT_PRINTER_TYPE: &str = "A4_2x2";

/// Webshop engine identifier sent when the configuration does not name one.
pub const DEFAULT_WEBSHOP_ENGINE: &str = "Vendure";

/// Content description attached to every parcel.
pub const PARCEL_CONTENT: &str = "Webshop order";

/// Code under which the host registers this shipping method.
pub const SHIPPING_HANDLER_CODE: &str = "gls-shipping";
