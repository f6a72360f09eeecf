//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Integer Cents, Decimal Intermediates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    100.0 × (1 − 0.1) = 90.00000000000001  ❌                            │
//! │                                                                         │
//! │  OUR SOLUTION                                                           │
//! │    Money stores integer cents         (every output has 2 decimals)    │
//! │    Prices, rates, weights are Decimal (0.333, 8.5%, 0.25 lb exact)     │
//! │    Decimal math → round once → Money                                   │
//! │                                                                         │
//! │  Rounding: half AWAY from zero at the cent                              │
//! │    0.125 → 0.13     -0.125 → -0.13     0.124 → 0.12                     │
//! │                                                                         │
//! │  Overflow: saturates at the i64 cent range, never panics or wraps      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::from_decimal(dec!(10.99));
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.cents(), 1599);
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::{DiscountRate, TaxRate};
use crate::CURRENCY_DECIMALS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Discounts above 100% legitimately go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating**: results beyond the cent range clamp to `i64::MIN`/`i64::MAX`
///
/// ## Where Money Flows
/// ```text
/// Σ unit_price × qty (Decimal) ──► subtotal ──► after_discount
///                                     │              │
///                                     │              ▼
///                                     │         tax ──► total
///                                     ▼
///                           shipping / coupon (caller composes)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an exact decimal amount to Money, rounding to the cent.
    ///
    /// Midpoints round away from zero. Amounts beyond the `i64` cent range
    /// saturate.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::from_decimal(dec!(10.125)).cents(), 1013);
    /// assert_eq!(Money::from_decimal(dec!(-10.125)).cents(), -1013);
    /// assert_eq!(Money::from_decimal(dec!(10.124)).cents(), 1012);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let rounded =
            amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .unwrap_or_else(|| Money::saturated(rounded.is_sign_negative()))
    }

    /// The extreme value on the given side of zero.
    #[inline]
    pub(crate) const fn saturated(negative: bool) -> Self {
        if negative {
            Money(i64::MIN)
        } else {
            Money(i64::MAX)
        }
    }

    /// Returns the exact decimal value (two decimal places).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CURRENCY_DECIMALS)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative amounts to zero.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-200).floor_at_zero(), Money::zero());
    /// assert_eq!(Money::from_cents(300).floor_at_zero().cents(), 300);
    /// ```
    #[inline]
    pub fn floor_at_zero(self) -> Self {
        self.max(Money::zero())
    }

    /// Multiplies by an exact factor and rounds once to the cent.
    ///
    /// A product outside the `Decimal` range saturates on the side of zero
    /// the product would have landed on.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use rust_decimal::Decimal;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::from_cents(1000).scale(dec!(0.0825)).cents(), 83);
    /// assert_eq!(Money::from_cents(1000).scale(Decimal::MAX).cents(), i64::MAX);
    /// ```
    pub fn scale(&self, factor: Decimal) -> Money {
        match self.to_decimal().checked_mul(factor) {
            Some(product) => Money::from_decimal(product),
            None => Money::saturated(self.is_negative() != factor.is_sign_negative()),
        }
    }

    /// Calculates tax on this amount, rounded to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use pricing_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(10000); // $100.00
    /// let tax = price.calculate_tax(TaxRate::default()); // 8.5%
    /// assert_eq!(tax.cents(), 850);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// After discount: $100.00
    ///      │
    ///      ▼
    /// calculate_tax(8.5%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: $8.50  ──►  Total: $108.50
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.scale(rate.fraction())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Computes `amount × (1 − percent/100)` and rounds once. Rates above
    /// 100% produce a negative amount; callers that do not want that must
    /// validate the rate first.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use pricing_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let discounted = subtotal.apply_percentage_discount(DiscountRate::from_bps(1000));
    /// assert_eq!(discounted.cents(), 9000); // $90.00
    /// ```
    pub fn apply_percentage_discount(&self, discount: DiscountRate) -> Money {
        // |fraction| <= Decimal::MAX / 100, so the subtraction stays in range
        self.scale(Decimal::ONE - discount.fraction())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and error messages. Localised formatting belongs to
/// the caller's display layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Saturating subtraction.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
