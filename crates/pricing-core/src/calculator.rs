//! # Pricing Calculator
//!
//! Subtotal, discount, tax and order-total calculations, plus a configured
//! [`PricingCalculator`] that also fronts shipping and coupons.
//!
//! ## Order Total Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       calculate_total                                   │
//! │                                                                         │
//! │  [LineItem] ──► calculate_subtotal ──► subtotal                         │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                          apply_discount(discount) ──► after_discount    │
//! │                                                           │             │
//! │                                                           ▼             │
//! │                                      calculate_tax(rate) ──► tax        │
//! │                                                                         │
//! │  total = after_discount + tax                                           │
//! │                                                                         │
//! │  NOT included: shipping, coupons. Callers compose those separately.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Defaults
//! The free functions take every argument explicitly. Omitted arguments are
//! expressed through `Default` impls: `TaxRate::default()` is 8.5%,
//! `DiscountRate::default()` is 0%, `Destination::default()` is domestic.
//! [`TotalOptions`] bundles the two `calculate_total` knobs.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::config::PricingConfig;
use crate::coupon;
use crate::error::PricingResult;
use crate::money::Money;
use crate::types::{Destination, DiscountRate, LineItem, PriceBreakdown, TaxRate};

// =============================================================================
// Free Functions
// =============================================================================

/// Sums `unit_price × quantity` over all items.
///
/// The sum is exact and rounded to the cent once, at the end, so three
/// items at 0.333 come to 1.00. Values are not validated; negative prices
/// or quantities pass through. An order whose total leaves the `Decimal`
/// range saturates on the side of the offending line.
///
/// ## Example
/// ```rust
/// use pricing_core::calculator::calculate_subtotal;
/// use pricing_core::LineItem;
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItem::new("Widget", dec!(10.00), 2),
///     LineItem::new("Gadget", dec!(25.50), 1),
/// ];
/// assert_eq!(calculate_subtotal(&items).cents(), 4550);
/// assert_eq!(calculate_subtotal(&[LineItem::new("Bolt", dec!(0.333), 3)]).cents(), 100);
/// assert!(calculate_subtotal(&[]).is_zero());
/// ```
pub fn calculate_subtotal(items: &[LineItem]) -> Money {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        let Some(line) = item.line_total() else {
            trace!(item = %item.name, "Line total out of range");
            return Money::saturated(item.is_credit());
        };
        match subtotal.checked_add(line) {
            Some(sum) => subtotal = sum,
            None => {
                trace!(item = %item.name, "Subtotal out of range");
                return Money::saturated(line.is_sign_negative());
            }
        }
    }
    Money::from_decimal(subtotal)
}

/// Applies a percentage discount: `subtotal × (1 − discount/100)`.
///
/// Not clamped. A discount above 100% returns a negative amount.
pub fn apply_discount(subtotal: Money, discount: DiscountRate) -> Money {
    subtotal.apply_percentage_discount(discount)
}

/// Tax on `amount` at `tax_rate`: `amount × tax_rate/100`.
///
/// Pass `TaxRate::default()` for the standard 8.5%.
pub fn calculate_tax(amount: Money, tax_rate: TaxRate) -> Money {
    amount.calculate_tax(tax_rate)
}

/// Computes the order breakdown: subtotal, discount, tax, total.
///
/// ## Example
/// ```rust
/// use pricing_core::calculator::calculate_total;
/// use pricing_core::{DiscountRate, LineItem, TaxRate};
/// use rust_decimal_macros::dec;
///
/// let items = vec![LineItem::new("Widget", dec!(100.00), 1)];
/// let breakdown = calculate_total(&items, DiscountRate::default(), TaxRate::default());
///
/// assert_eq!(breakdown.subtotal.cents(), 10000);
/// assert_eq!(breakdown.after_discount.cents(), 10000);
/// assert_eq!(breakdown.tax.cents(), 850);
/// assert_eq!(breakdown.total.cents(), 10850);
/// ```
pub fn calculate_total(
    items: &[LineItem],
    discount: DiscountRate,
    tax_rate: TaxRate,
) -> PriceBreakdown {
    let subtotal = calculate_subtotal(items);
    let after_discount = apply_discount(subtotal, discount);
    let tax = calculate_tax(after_discount, tax_rate);
    let total = after_discount + tax;

    debug!(
        items = items.len(),
        subtotal = %subtotal,
        discount_percent = %discount.percentage(),
        tax = %tax,
        total = %total,
        "Calculated order total"
    );

    PriceBreakdown {
        subtotal,
        discount_percent: discount,
        after_discount,
        tax,
        total,
    }
}

/// [`calculate_total`] driven by a [`TotalOptions`].
pub fn calculate_total_with(items: &[LineItem], options: TotalOptions) -> PriceBreakdown {
    calculate_total(items, options.discount, options.tax_rate)
}

/// [`calculate_total`] with no discount and the standard 8.5% tax.
pub fn calculate_total_default(items: &[LineItem]) -> PriceBreakdown {
    calculate_total_with(items, TotalOptions::default())
}

// =============================================================================
// Total Options
// =============================================================================

/// Optional knobs for [`calculate_total`]. Defaults: 0% discount, 8.5% tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalOptions {
    pub discount: DiscountRate,
    pub tax_rate: TaxRate,
}

impl TotalOptions {
    pub fn with_discount(mut self, discount: DiscountRate) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }
}

// =============================================================================
// Configured Calculator
// =============================================================================

/// Pricing operations bound to a [`PricingConfig`].
///
/// Methods take only the arguments the configuration does not supply. With
/// `PricingConfig::default()` every method behaves exactly like its free
/// function counterpart.
///
/// ## Example
/// ```rust
/// use pricing_core::calculator::PricingCalculator;
/// use pricing_core::config::PricingConfig;
/// use pricing_core::{Destination, DiscountRate, LineItem};
/// use rust_decimal_macros::dec;
///
/// let calc = PricingCalculator::new(PricingConfig::default());
/// let items = vec![LineItem::new("Widget", dec!(40.00), 1)];
///
/// let order = calc.total(&items, DiscountRate::default());
/// let shipping = calc
///     .shipping(order.subtotal, dec!(2), Destination::Domestic)
///     .unwrap();
///
/// assert_eq!(order.total.cents(), 4340);
/// assert_eq!(shipping.cents(), 600);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingCalculator {
    config: PricingConfig,
}

impl PricingCalculator {
    pub fn new(config: PricingConfig) -> Self {
        PricingCalculator { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn subtotal(&self, items: &[LineItem]) -> Money {
        calculate_subtotal(items)
    }

    pub fn discount(&self, subtotal: Money, discount: DiscountRate) -> Money {
        apply_discount(subtotal, discount)
    }

    /// Tax at the configured default rate.
    pub fn tax(&self, amount: Money) -> Money {
        calculate_tax(amount, self.config.default_tax_rate)
    }

    /// Tax at an explicit rate.
    pub fn tax_at(&self, amount: Money, tax_rate: TaxRate) -> Money {
        calculate_tax(amount, tax_rate)
    }

    /// Shipping under the configured policy.
    pub fn shipping(
        &self,
        subtotal: Money,
        weight_lb: Decimal,
        destination: Destination,
    ) -> PricingResult<Money> {
        self.config.shipping.quote(subtotal, weight_lb, destination)
    }

    pub fn coupon(&self, subtotal: Money, coupon_code: &str) -> PricingResult<Money> {
        coupon::apply_coupon(subtotal, coupon_code)
    }

    /// Order breakdown at the configured default tax rate.
    pub fn total(&self, items: &[LineItem], discount: DiscountRate) -> PriceBreakdown {
        calculate_total(items, discount, self.config.default_tax_rate)
    }

    pub fn total_with(&self, items: &[LineItem], options: TotalOptions) -> PriceBreakdown {
        calculate_total_with(items, options)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
