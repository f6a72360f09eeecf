//! # Shipping
//!
//! Weight and destination based shipping cost.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal < 0 ?  ──► InvalidArgument(subtotal)                          │
//! │  weight   < 0 ?  ──► InvalidArgument(weight_lb)                         │
//! │                                                                         │
//! │  Domestic && subtotal ≥ $50.00 ──► $0.00 (threshold inclusive)          │
//! │                                                                         │
//! │  otherwise: base + weight_lb × per_lb                                   │
//! │     Domestic       $5.00  + $0.50/lb                                    │
//! │     International  $15.00 + $2.50/lb   (never free)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shipping is not part of [`crate::calculator::calculate_total`]; callers add
//! it to the payable amount themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PricingResult;
use crate::money::Money;
use crate::types::Destination;
use crate::validation::{validate_non_negative_money, validate_weight};

// =============================================================================
// Rates
// =============================================================================

/// Flat base charge plus a per-pound charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub base: Money,
    pub per_lb: Money,
}

impl ShippingRates {
    pub const DOMESTIC: ShippingRates = ShippingRates {
        base: Money::from_cents(500),
        per_lb: Money::from_cents(50),
    };

    pub const INTERNATIONAL: ShippingRates = ShippingRates {
        base: Money::from_cents(1500),
        per_lb: Money::from_cents(250),
    };

    /// `base + weight_lb × per_lb`, rounded to the cent. Saturates at the
    /// top of the cent range for absurd weights.
    pub fn cost(&self, weight_lb: Decimal) -> Money {
        self.base + self.per_lb.scale(weight_lb)
    }
}

// =============================================================================
// Policy
// =============================================================================

/// Complete shipping policy: free-shipping threshold plus per-destination rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Domestic orders at or above this subtotal ship free.
    pub free_shipping_threshold: Money,
    pub domestic: ShippingRates,
    pub international: ShippingRates,
}

impl ShippingPolicy {
    pub const STANDARD: ShippingPolicy = ShippingPolicy {
        free_shipping_threshold: Money::from_cents(5000),
        domestic: ShippingRates::DOMESTIC,
        international: ShippingRates::INTERNATIONAL,
    };

    /// Rate table for a destination.
    pub fn rates(&self, destination: Destination) -> &ShippingRates {
        match destination {
            Destination::Domestic => &self.domestic,
            Destination::International => &self.international,
        }
    }

    /// Quotes shipping under this policy.
    ///
    /// ## Errors
    /// `InvalidArgument` naming `subtotal` or `weight_lb` when either is
    /// negative. The subtotal is checked first.
    pub fn quote(
        &self,
        subtotal: Money,
        weight_lb: Decimal,
        destination: Destination,
    ) -> PricingResult<Money> {
        if let Err(err) = validate_non_negative_money("subtotal", subtotal)
            .and_then(|()| validate_weight(weight_lb))
        {
            debug!(subtotal = %subtotal, weight_lb = %weight_lb, error = %err, "Rejected shipping quote");
            return Err(err.into());
        }

        if destination == Destination::Domestic && subtotal >= self.free_shipping_threshold {
            trace!(subtotal = %subtotal, "Free shipping threshold met");
            return Ok(Money::zero());
        }

        let cost = self.rates(destination).cost(weight_lb);
        debug!(?destination, weight_lb = %weight_lb, cost = %cost, "Quoted shipping");
        Ok(cost)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::STANDARD
    }
}

// =============================================================================
// Call Surface
// =============================================================================

/// Calculates shipping cost under the standard policy.
///
/// ## Example
/// ```rust
/// use pricing_core::shipping::calculate_shipping;
/// use pricing_core::{Destination, Money};
/// use rust_decimal_macros::dec;
///
/// // Domestic, at the free-shipping threshold
/// let free = calculate_shipping(Money::from_cents(5000), dec!(10), Destination::Domestic).unwrap();
/// assert!(free.is_zero());
///
/// // International never ships free
/// let intl = calculate_shipping(Money::from_cents(100000), dec!(0), Destination::International).unwrap();
/// assert_eq!(intl.cents(), 1500);
/// ```
pub fn calculate_shipping(
    subtotal: Money,
    weight_lb: Decimal,
    destination: Destination,
) -> PricingResult<Money> {
    ShippingPolicy::STANDARD.quote(subtotal, weight_lb, destination)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PricingError, ValidationError};
    use rust_decimal_macros::dec;

    fn rejected_field(result: PricingResult<Money>) -> String {
        match result {
            Err(PricingError::InvalidArgument(err)) => err.field().to_string(),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_domestic_free_shipping_threshold_is_inclusive() {
        for weight in [dec!(0), dec!(1), dec!(25.5), dec!(1000)] {
            let cost = calculate_shipping(Money::from_cents(5000), weight, Destination::Domestic)
                .unwrap();
            assert_eq!(cost, Money::zero());
        }
    }

    #[test]
    fn test_domestic_below_threshold_pays_base_rate() {
        let cost =
            calculate_shipping(Money::from_cents(4999), dec!(0), Destination::Domestic).unwrap();
        assert_eq!(cost.cents(), 500);
    }

    #[test]
    fn test_domestic_weight_charge() {
        // 5.00 + 3 × 0.50
        let cost =
            calculate_shipping(Money::from_cents(2000), dec!(3), Destination::Domestic).unwrap();
        assert_eq!(cost.cents(), 650);

        // 5.00 + 0.25 × 0.50 = 5.125 → 5.13
        let cost =
            calculate_shipping(Money::from_cents(2000), dec!(0.25), Destination::Domestic)
                .unwrap();
        assert_eq!(cost.cents(), 513);
    }

    #[test]
    fn test_international_never_free() {
        let cost =
            calculate_shipping(Money::from_cents(100000), dec!(0), Destination::International)
                .unwrap();
        assert_eq!(cost.cents(), 1500);

        // 15.00 + 2 × 2.50
        let cost =
            calculate_shipping(Money::from_cents(5000), dec!(2), Destination::International)
                .unwrap();
        assert_eq!(cost.cents(), 2000);
    }

    #[test]
    fn test_extreme_weight_saturates() {
        let cost = calculate_shipping(
            Money::from_cents(100),
            Decimal::MAX / dec!(2),
            Destination::International,
        )
        .unwrap();
        assert_eq!(cost.cents(), i64::MAX);

        let cost =
            calculate_shipping(Money::from_cents(100), Decimal::MAX, Destination::Domestic)
                .unwrap();
        assert_eq!(cost.cents(), i64::MAX);
    }

    #[test]
    fn test_negative_subtotal_rejected() {
        let result = calculate_shipping(Money::from_cents(-1), dec!(1), Destination::Domestic);
        assert_eq!(rejected_field(result), "subtotal");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = calculate_shipping(Money::from_cents(1000), dec!(-0.5), Destination::Domestic);
        assert_eq!(rejected_field(result), "weight_lb");
    }

    #[test]
    fn test_subtotal_checked_before_weight() {
        let result =
            calculate_shipping(Money::from_cents(-100), dec!(-1), Destination::International);
        assert_eq!(rejected_field(result), "subtotal");
    }

    #[test]
    fn test_error_message_identifies_argument() {
        let err = calculate_shipping(Money::from_cents(-100), dec!(0), Destination::Domestic)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: subtotal must not be negative (got -$1.00)"
        );
        assert!(matches!(
            err,
            PricingError::InvalidArgument(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_custom_policy() {
        let policy = ShippingPolicy {
            free_shipping_threshold: Money::from_cents(10000),
            ..ShippingPolicy::STANDARD
        };
        let cost = policy
            .quote(Money::from_cents(5000), dec!(0), Destination::Domestic)
            .unwrap();
        assert_eq!(cost.cents(), 500);
    }
}
