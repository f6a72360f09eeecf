//! # Coupons
//!
//! Named discount rules resolved through a static, process-wide table.
//!
//! ## Lookup Flow
//! ```text
//! "  save10 "  ──► trim + uppercase ──► "SAVE10" ──► table ──► Percent(10)
//!                                                     │
//!                                                     └── miss ──► UnknownCoupon("  save10 ")
//! ```
//!
//! | Code      | Kind    | Value |
//! |-----------|---------|-------|
//! | SAVE10    | percent | 10    |
//! | FLAT5     | fixed   | 5.00  |
//! | WELCOME20 | percent | 20    |
//!
//! The table is built once on first use and never mutated.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::DiscountRate;

// =============================================================================
// Coupon Types
// =============================================================================

/// What a coupon takes off the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CouponKind {
    /// Percent off (10 means 10% off).
    Percent(Decimal),
    /// Fixed amount off.
    Fixed(Money),
}

/// A coupon from the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    /// Normalised (upper-case) code.
    pub code: &'static str,
    pub kind: CouponKind,
}

impl Coupon {
    /// Applies this coupon to a subtotal.
    ///
    /// The result never drops below zero, so a $5 coupon on a $3 order
    /// yields $0.00.
    pub fn apply(&self, subtotal: Money) -> Money {
        let discounted = match self.kind {
            CouponKind::Percent(percent) => {
                subtotal.apply_percentage_discount(DiscountRate::from_percentage(percent))
            }
            CouponKind::Fixed(amount) => subtotal - amount,
        };
        discounted.floor_at_zero()
    }
}

// =============================================================================
// Static Table
// =============================================================================

const COUPONS: [Coupon; 3] = [
    Coupon {
        code: "SAVE10",
        kind: CouponKind::Percent(dec!(10)),
    },
    Coupon {
        code: "FLAT5",
        kind: CouponKind::Fixed(Money::from_cents(500)),
    },
    Coupon {
        code: "WELCOME20",
        kind: CouponKind::Percent(dec!(20)),
    },
];

static COUPON_TABLE: Lazy<BTreeMap<&'static str, Coupon>> =
    Lazy::new(|| COUPONS.iter().map(|coupon| (coupon.code, *coupon)).collect());

// =============================================================================
// Lookup
// =============================================================================

/// Normalises a coupon code for lookup: trims surrounding whitespace and
/// upper-cases.
///
/// ## Example
/// ```rust
/// use pricing_core::coupon::normalize_coupon_code;
///
/// assert_eq!(normalize_coupon_code("  save10\t"), "SAVE10");
/// ```
pub fn normalize_coupon_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Finds a coupon by code, ignoring case and surrounding whitespace.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    COUPON_TABLE.get(normalize_coupon_code(code).as_str())
}

/// Iterates over every known coupon in code order.
pub fn coupons() -> impl Iterator<Item = &'static Coupon> {
    COUPON_TABLE.values()
}

/// Applies a coupon code to a subtotal.
///
/// ## Errors
/// [`PricingError::UnknownCoupon`] carrying `coupon_code` exactly as given
/// when the normalised code is not in the table.
///
/// ## Example
/// ```rust
/// use pricing_core::coupon::apply_coupon;
/// use pricing_core::Money;
///
/// let subtotal = Money::from_cents(10000);
/// assert_eq!(apply_coupon(subtotal, "  save10 ").unwrap().cents(), 9000);
/// assert_eq!(apply_coupon(Money::from_cents(300), "FLAT5").unwrap().cents(), 0);
/// assert!(apply_coupon(subtotal, "FAKECODE").is_err());
/// ```
pub fn apply_coupon(subtotal: Money, coupon_code: &str) -> PricingResult<Money> {
    let Some(coupon) = find_coupon(coupon_code) else {
        debug!(code = %coupon_code, "Unknown coupon code");
        return Err(PricingError::UnknownCoupon {
            code: coupon_code.to_string(),
        });
    };

    let discounted = coupon.apply(subtotal);
    debug!(
        code = coupon.code,
        subtotal = %subtotal,
        discounted = %discounted,
        "Applied coupon"
    );
    Ok(discounted)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        let codes: Vec<_> = coupons().map(|c| c.code).collect();
        assert_eq!(codes, vec!["FLAT5", "SAVE10", "WELCOME20"]);

        assert_eq!(
            find_coupon("SAVE10").map(|c| c.kind),
            Some(CouponKind::Percent(dec!(10)))
        );
        assert_eq!(
            find_coupon("FLAT5").map(|c| c.kind),
            Some(CouponKind::Fixed(Money::from_cents(500)))
        );
        assert_eq!(
            find_coupon("WELCOME20").map(|c| c.kind),
            Some(CouponKind::Percent(dec!(20)))
        );
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let hundred = Money::from_cents(10000);
        let plain = apply_coupon(hundred, "SAVE10").unwrap();
        assert_eq!(plain.cents(), 9000);
        assert_eq!(apply_coupon(hundred, "save10").unwrap(), plain);
        assert_eq!(apply_coupon(hundred, "  SAVE10  ").unwrap(), plain);
        assert_eq!(apply_coupon(hundred, "\tSaVe10\n").unwrap(), plain);
    }

    #[test]
    fn test_welcome_coupon() {
        let result = apply_coupon(Money::from_cents(4999), "welcome20").unwrap();
        // 49.99 × 0.8 = 39.992
        assert_eq!(result.cents(), 3999);
    }

    #[test]
    fn test_fixed_coupon_subtracts() {
        let result = apply_coupon(Money::from_cents(2000), "FLAT5").unwrap();
        assert_eq!(result.cents(), 1500);
    }

    #[test]
    fn test_fixed_coupon_floors_at_zero() {
        assert_eq!(
            apply_coupon(Money::from_cents(300), "FLAT5").unwrap(),
            Money::zero()
        );
        assert_eq!(
            apply_coupon(Money::from_cents(500), "FLAT5").unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_negative_subtotal_floors_at_zero() {
        assert_eq!(
            apply_coupon(Money::from_cents(-1000), "SAVE10").unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_unknown_coupon_carries_original_text() {
        let err = apply_coupon(Money::from_cents(10000), "FAKECODE").unwrap_err();
        assert!(matches!(
            &err,
            PricingError::UnknownCoupon { code } if code == "FAKECODE"
        ));
        assert!(err.to_string().contains("FAKECODE"));

        let err = apply_coupon(Money::from_cents(10000), " nope ").unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnknownCoupon { code } if code == " nope "
        ));
    }

    #[test]
    fn test_coupons_at_cent_range_edges_saturate() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(apply_coupon(max, "SAVE10").unwrap().cents(), 8301034833169298226);
        assert_eq!(apply_coupon(min, "FLAT5").unwrap(), Money::zero());
        assert_eq!(apply_coupon(max, "FLAT5").unwrap().cents(), i64::MAX - 500);
    }

    #[test]
    fn test_empty_code_is_unknown() {
        assert!(matches!(
            apply_coupon(Money::from_cents(100), "   "),
            Err(PricingError::UnknownCoupon { .. })
        ));
    }

    #[test]
    fn test_coupon_serializes_with_kind_tag() {
        let coupon = find_coupon("flat5").unwrap();
        let json = serde_json::to_value(coupon).unwrap();
        assert_eq!(json["code"], "FLAT5");
        assert_eq!(json["kind"]["kind"], "fixed");
        assert_eq!(json["kind"]["value"], 500);
    }
}
