//! # Validation Module
//!
//! Argument validators for pricing inputs.
//!
//! ## Who Validates What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Caller (checkout service)                                              │
//! │  ├── validate_line_item         before building the order              │
//! │  ├── validate_discount_percent  before apply_discount / calculate_total │
//! │  └── validate_coupon_code       before apply_coupon                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  pricing-core calculations                                              │
//! │  ├── subtotal / discount / tax: pass-through, no validation            │
//! │  └── shipping: validate_non_negative_money + validate_weight           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::{validate_discount_percent, validate_weight};
//! use pricing_core::DiscountRate;
//! use rust_decimal_macros::dec;
//!
//! assert!(validate_weight(dec!(2.5)).is_ok());
//! assert!(validate_discount_percent(DiscountRate::from_percentage(dec!(150))).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DiscountRate, LineItem};
use crate::{MAX_COUPON_CODE_LEN, MAX_LINE_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Rejects a negative monetary amount, naming `field` in the error.
///
/// Zero is allowed.
pub fn validate_non_negative_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
            value: amount.to_string(),
        });
    }

    Ok(())
}

/// Rejects a negative package weight in pounds.
pub fn validate_weight(weight_lb: Decimal) -> ValidationResult<()> {
    validate_non_negative_decimal("weight_lb", weight_lb)
}

/// Negative zero counts as zero.
fn validate_non_negative_decimal(field: &str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// The discount calculation itself accepts any rate; this is for callers
/// that must never produce a negative discounted amount.
pub fn validate_discount_percent(discount: DiscountRate) -> ValidationResult<()> {
    let percent = discount.percentage();
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a line item before it is priced.
///
/// ## Rules
/// - Name must not be blank and at most 200 characters
/// - Unit price must not be negative (zero is a free item)
/// - Quantity must not be negative (zero contributes nothing)
///
/// ## Example
/// ```rust
/// use pricing_core::validation::validate_line_item;
/// use pricing_core::LineItem;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_line_item(&LineItem::new("Widget", dec!(10.00), 2)).is_ok());
/// assert!(validate_line_item(&LineItem::new("", dec!(10.00), 2)).is_err());
/// assert!(validate_line_item(&LineItem::new("Widget", dec!(-0.01), 2)).is_err());
/// ```
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    let name = item.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_LINE_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_LINE_ITEM_NAME_LEN,
        });
    }

    validate_non_negative_decimal("unit_price", item.unit_price)?;

    if item.quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
            value: item.quantity.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Coupon Validators
// =============================================================================

/// Validates the shape of a coupon code (not whether it exists).
///
/// ## Returns
/// The normalised code.
pub fn validate_coupon_code(code: &str) -> ValidationResult<String> {
    let normalized = crate::coupon::normalize_coupon_code(code);

    if normalized.is_empty() {
        return Err(ValidationError::Required {
            field: "coupon_code".to_string(),
        });
    }

    if normalized.chars().count() > MAX_COUPON_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "coupon_code".to_string(),
            max: MAX_COUPON_CODE_LEN,
        });
    }

    Ok(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_non_negative_money() {
        assert!(validate_non_negative_money("subtotal", Money::zero()).is_ok());
        assert!(validate_non_negative_money("subtotal", Money::from_cents(1)).is_ok());

        let err = validate_non_negative_money("subtotal", Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.field(), "subtotal");
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(dec!(0)).is_ok());
        assert!(validate_weight(dec!(-0)).is_ok());
        assert!(validate_weight(dec!(12.75)).is_ok());

        let err = validate_weight(dec!(-0.01)).unwrap_err();
        assert_eq!(err.to_string(), "weight_lb must not be negative (got -0.01)");
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(DiscountRate::none()).is_ok());
        assert!(validate_discount_percent(DiscountRate::from_percentage(dec!(100))).is_ok());
        assert!(validate_discount_percent(DiscountRate::from_percentage(dec!(12.5))).is_ok());

        assert!(validate_discount_percent(DiscountRate::from_percentage(dec!(100.01))).is_err());
        assert!(validate_discount_percent(DiscountRate::from_percentage(dec!(-5))).is_err());
    }

    #[test]
    fn test_validate_line_item() {
        let ok = LineItem::new("Gadget", dec!(25.50), 1);
        assert!(validate_line_item(&ok).is_ok());

        let free = LineItem::new("Sticker", Decimal::ZERO, 0);
        assert!(validate_line_item(&free).is_ok());

        let blank = LineItem::new("   ", dec!(1.00), 1);
        assert_eq!(validate_line_item(&blank).unwrap_err().field(), "name");

        let long = LineItem::new("A".repeat(201), dec!(1.00), 1);
        assert!(matches!(
            validate_line_item(&long),
            Err(ValidationError::TooLong { max: 200, .. })
        ));

        let negative_qty = LineItem::new("Widget", dec!(1.00), -1);
        assert_eq!(validate_line_item(&negative_qty).unwrap_err().field(), "quantity");

        let negative_price = LineItem::new("Widget", dec!(-0.001), 1);
        assert!(matches!(
            validate_line_item(&negative_price),
            Err(ValidationError::MustNotBeNegative { field, value })
                if field == "unit_price" && value == "-0.001"
        ));

        let fractional = LineItem::new("Bolt", dec!(0.333), 3);
        assert!(validate_line_item(&fractional).is_ok());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert_eq!(validate_coupon_code(" save10 ").unwrap(), "SAVE10");
        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("   ").is_err());
        assert!(validate_coupon_code(&"X".repeat(33)).is_err());
    }
}
