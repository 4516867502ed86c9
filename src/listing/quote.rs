use crate::models::{PriceType, Property};
use serde::Serialize;

/// Flat platform fee added to every booking (NGN)
pub const SERVICE_FEE: u64 = 15_000;

/// Nights quoted when the guest hasn't picked dates
pub const DEFAULT_NIGHTS: u32 = 5;

/// Price breakdown shown next to the reserve button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub unit_price: u64,
    pub quantity: u32,
    pub subtotal: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl BookingQuote {
    /// Nightly listings are charged per night, everything else once
    pub fn for_property(property: &Property, nights: u32) -> Self {
        let quantity = match property.price_type {
            PriceType::PerNight => nights,
            _ => 1,
        };
        let subtotal = property.price.saturating_mul(u64::from(quantity));
        Self {
            unit_price: property.price,
            quantity,
            subtotal,
            service_fee: SERVICE_FEE,
            total: subtotal.saturating_add(SERVICE_FEE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::mock_properties;

    #[test]
    fn test_nightly_quote() {
        let properties = mock_properties();
        let quote = BookingQuote::for_property(&properties[0], DEFAULT_NIGHTS);
        assert_eq!(quote.quantity, 5);
        assert_eq!(quote.subtotal, 600_000);
        assert_eq!(quote.total, 615_000);
    }

    #[test]
    fn test_sale_quote_ignores_nights() {
        let properties = mock_properties();
        let quote = BookingQuote::for_property(&properties[6], 3);
        assert_eq!(quote.quantity, 1);
        assert_eq!(quote.total, 950_000 + SERVICE_FEE);
    }
}
