//! # Domain Types
//!
//! Value types that flow through the pricing calculations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    TaxRate      │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  percent (dec)  │   │  percent (dec)  │       │
//! │  │  unit_price     │   │  8.5 = 8.5%     │   │  10 = 10% off   │       │
//! │  │  quantity       │   │  default 8.5    │   │  default 0      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │  Destination    │   │          PriceBreakdown              │        │
//! │  │  ─────────────  │   │  subtotal, discount_percent,         │        │
//! │  │  Domestic       │   │  after_discount, tax, total          │        │
//! │  │  International  │   └──────────────────────────────────────┘        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are constructed per request by the caller and never retained.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate expressed as a percentage (8.5 means 8.5%).
///
/// ## Why Decimal?
/// Jurisdictions publish rates like 8.875%. A `Decimal` keeps the rate
/// exact; the result is rounded once, when it becomes Money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(#[ts(type = "string")] Decimal);

impl TaxRate {
    /// The rate applied when the caller does not name one: 8.5%.
    pub const DEFAULT: TaxRate = TaxRate(Decimal::from_parts(85, 0, 0, false, 1));

    /// Creates a tax rate from a percentage.
    #[inline]
    pub const fn from_percentage(percent: Decimal) -> Self {
        TaxRate(percent)
    }

    /// Creates a tax rate from basis points (850 bps = 8.5%).
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 2))
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction of one (8.5% → 0.085).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::DEFAULT
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount (10 means 10% off).
///
/// Not range-checked. A rate above 100 makes the discounted amount negative;
/// see [`crate::validation::validate_discount_percent`] for callers that
/// want to reject such rates up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(#[ts(type = "string")] Decimal);

impl DiscountRate {
    #[inline]
    pub const fn from_percentage(percent: Decimal) -> Self {
        DiscountRate(percent)
    }

    /// Creates a discount from basis points (1000 bps = 10%).
    pub fn from_bps(bps: u32) -> Self {
        DiscountRate(Decimal::new(i64::from(bps), 2))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate(Decimal::ZERO)
    }

    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction of one (10% → 0.10).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::none()
    }
}

// =============================================================================
// Destination
// =============================================================================

/// Where an order ships. Drives the shipping rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Ships within the home country. Eligible for free shipping.
    #[default]
    Domestic,
    /// Ships abroad. Never ships free.
    International,
}

impl Destination {
    /// Maps an `is_international` flag onto a destination.
    #[inline]
    pub const fn from_international(is_international: bool) -> Self {
        if is_international {
            Destination::International
        } else {
            Destination::Domestic
        }
    }

    #[inline]
    pub const fn is_international(&self) -> bool {
        matches!(self, Destination::International)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of an order: a product name, its unit price and a quantity.
///
/// The unit price stays an exact decimal so fractional-cent prices
/// (`0.333`) are multiplied before any rounding happens.
///
/// Aggregation does not validate these values. Callers that accept line
/// items from untrusted input should run
/// [`crate::validation::validate_line_item`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Display name.
    pub name: String,

    /// Price of a single unit, in currency units (not cents).
    #[ts(type = "string")]
    pub unit_price: Decimal,

    /// Number of units ordered.
    pub quantity: i64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Exact line total (unit price × quantity), unrounded.
    ///
    /// `None` when the product does not fit in a `Decimal`.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::LineItem;
    /// use rust_decimal_macros::dec;
    ///
    /// let item = LineItem::new("Widget", dec!(0.333), 3);
    /// assert_eq!(item.line_total(), Some(dec!(0.999)));
    /// ```
    #[inline]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Whether the line total is below zero (price and quantity of opposite
    /// signs).
    #[inline]
    pub fn is_credit(&self) -> bool {
        !self.unit_price.is_zero()
            && self.quantity != 0
            && self.unit_price.is_sign_negative() != (self.quantity < 0)
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Result of [`crate::calculator::calculate_total`].
///
/// Each field holds the value exactly as its step produced it; only `total`
/// is derived here (`after_discount + tax`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// The discount rate that was applied.
    pub discount_percent: DiscountRate,

    /// Subtotal after the percentage discount.
    pub after_discount: Money,

    /// Tax on the discounted amount.
    pub tax: Money,

    /// `after_discount + tax`.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_default_is_eight_and_a_half_percent() {
        let rate = TaxRate::default();
        assert_eq!(rate.percentage(), dec!(8.5));
        assert_eq!(rate.fraction(), dec!(0.085));
        assert_eq!(rate, TaxRate::from_bps(850));
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.percentage(), dec!(8.25));
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_discount_rate_default_is_none() {
        assert!(DiscountRate::default().is_zero());
        assert_eq!(DiscountRate::from_bps(1000).percentage(), dec!(10));
    }

    #[test]
    fn test_destination_from_flag() {
        assert_eq!(Destination::from_international(false), Destination::Domestic);
        assert_eq!(
            Destination::from_international(true),
            Destination::International
        );
        assert_eq!(Destination::default(), Destination::Domestic);
        assert!(Destination::International.is_international());
    }

    #[test]
    fn test_line_total_passes_negatives_through() {
        let refund = LineItem::new("Return", dec!(-5.00), 2);
        assert_eq!(refund.line_total(), Some(dec!(-10.00)));
        assert!(refund.is_credit());
        assert!(!LineItem::new("Widget", dec!(5.00), 2).is_credit());
    }

    #[test]
    fn test_line_total_keeps_fractional_cents() {
        let item = LineItem::new("Bolt", dec!(0.333), 3);
        assert_eq!(item.line_total(), Some(dec!(0.999)));
    }

    #[test]
    fn test_line_total_out_of_decimal_range() {
        let item = LineItem::new("Bulk", Decimal::MAX, 2);
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_line_item_json_carries_decimal_price() {
        let item = LineItem::new("Widget", dec!(10.99), 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unit_price"], "10.99");
        let back: LineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_price_breakdown_json_shape() {
        let breakdown = PriceBreakdown {
            subtotal: Money::from_cents(10000),
            discount_percent: DiscountRate::none(),
            after_discount: Money::from_cents(10000),
            tax: Money::from_cents(850),
            total: Money::from_cents(10850),
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["subtotal"], 10000);
        assert_eq!(json["discount_percent"], "0");
        assert_eq!(json["total"], 10850);
    }
}
