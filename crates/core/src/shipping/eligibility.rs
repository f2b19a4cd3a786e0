//! Shipping-method eligibility for checkout

use mygls_domain::constants::SHIPPING_HANDLER_CODE;
use mygls_domain::Order;

/// Predicate the host checkout calls when deciding whether to offer GLS
/// delivery for an order.
///
/// GLS delivery is offered unconditionally; the order is never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityChecker;

impl EligibilityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Code under which the host registers this shipping method.
    pub fn code(&self) -> &'static str {
        SHIPPING_HANDLER_CODE
    }

    /// Whether GLS delivery may be offered for the given order.
    pub fn check(&self, _order: &Order) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approves_any_order() {
        let checker = EligibilityChecker::new();

        let order = Order {
            code: "ORD-1".to_string(),
            shipping_address: mygls_domain::ShippingAddress {
                first_name: "Ana".to_string(),
                last_name: "Novak".to_string(),
                street_line1: "Dunajska cesta 5".to_string(),
                city: "Ljubljana".to_string(),
                postal_code: "1000".to_string(),
                country_code: "SI".to_string(),
                email_address: None,
                phone_number: None,
            },
        };

        assert!(checker.check(&order));
    }

    #[test]
    fn approves_empty_order() {
        // The checker ignores its argument entirely, so even a blank order
        // passes.
        let checker = EligibilityChecker::new();
        assert!(checker.check(&Order::default()));
    }

    #[test]
    fn exposes_handler_code() {
        assert_eq!(EligibilityChecker::new().code(), "gls-shipping");
    }
}
