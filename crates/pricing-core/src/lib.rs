//! # pricing-core: Pure Order Pricing for Checkout
//!
//! This crate computes order prices: subtotal aggregation, percentage
//! discounts, coupon-code discounts, tax, and weight/destination based
//! shipping. Every function is pure, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout / Order Service (caller)                  │   │
//! │  │    builds LineItems, picks discount, coupon, destination        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │calculator│ │  coupon  │ │ shipping │ │  money   │ │config │ │   │
//! │  │  │ subtotal │ │  SAVE10  │ │ domestic │ │  Money   │ │ rates │ │   │
//! │  │  │ discount │ │  FLAT5   │ │  intl    │ │ rounding │ │       │ │   │
//! │  │  │ tax/total│ │WELCOME20 │ │          │ │          │ │       │ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Subtotal, discount, tax, total; configured calculator
//! - [`coupon`] - Static coupon table and coupon application
//! - [`shipping`] - Shipping rates and free-shipping policy
//! - [`money`] - Money type (integer cents, half-away-from-zero rounding)
//! - [`types`] - LineItem, TaxRate, DiscountRate, Destination, PriceBreakdown
//! - [`config`] - PricingConfig (defaults, environment, JSON)
//! - [`validation`] - Argument validators
//! - [`error`] - Error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; safe from any thread
//! 2. **Integer Money**: amounts are cents; unit prices, rates and weights are exact decimals
//! 3. **Explicit Errors**: typed errors, never strings or panics
//! 4. **Separate Steps**: shipping and coupons are not folded into the order total
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_core::{
//!     apply_coupon, calculate_shipping, calculate_total, Destination, DiscountRate, LineItem,
//!     TaxRate,
//! };
//! use rust_decimal_macros::dec;
//!
//! let items = vec![LineItem::new("Widget", dec!(100.00), 1)];
//! let order = calculate_total(&items, DiscountRate::default(), TaxRate::default());
//! assert_eq!(order.total.cents(), 10850);
//!
//! let shipping = calculate_shipping(order.subtotal, dec!(3), Destination::Domestic).unwrap();
//! assert!(shipping.is_zero());
//!
//! let with_coupon = apply_coupon(order.subtotal, "save10").unwrap();
//! assert_eq!(with_coupon.cents(), 9000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod coupon;
pub mod error;
pub mod money;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pricing_core::Money` instead of
// `use pricing_core::money::Money`

pub use calculator::{
    apply_discount, calculate_subtotal, calculate_tax, calculate_total, calculate_total_default,
    calculate_total_with, PricingCalculator, TotalOptions,
};
pub use config::PricingConfig;
pub use coupon::{apply_coupon, Coupon, CouponKind};
pub use error::{ConfigError, PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use shipping::{calculate_shipping, ShippingPolicy, ShippingRates};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places of every monetary output.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Longest line item name accepted by [`validation::validate_line_item`].
pub const MAX_LINE_ITEM_NAME_LEN: usize = 200;

/// Longest coupon code accepted by [`validation::validate_coupon_code`].
pub const MAX_COUPON_CODE_LEN: usize = 32;
