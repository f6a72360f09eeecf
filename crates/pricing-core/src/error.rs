//! # Error Types
//!
//! Domain-specific error types for pricing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError         - What a failed calculation returns              │
//! │  ├── InvalidArgument  - wraps ValidationError (shipping inputs)        │
//! │  └── UnknownCoupon    - coupon code not in the static table           │
//! │                                                                         │
//! │  ValidationError      - Field-level input failures                     │
//! │  ConfigError          - Bad configuration overrides                    │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → caller                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, coupon code)
//! 3. Errors are enum variants, never String
//! 4. Nothing in this crate retries or swallows an error

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by pricing calculations.
///
/// Every error aborts the single calculation that produced it. There are no
/// partial results.
#[derive(Debug, Error)]
pub enum PricingError {
    /// An argument was rejected before any arithmetic happened.
    ///
    /// ## When This Occurs
    /// - Shipping requested for a negative subtotal
    /// - Shipping requested for a negative weight
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The coupon code does not match any known coupon.
    ///
    /// `code` is the text exactly as the caller supplied it, before
    /// trimming and upper-casing.
    ///
    /// ## User Workflow
    /// ```text
    /// Customer types "  fakecode "
    ///      │
    ///      ▼
    /// normalize → "FAKECODE" → not in table
    ///      │
    ///      ▼
    /// UnknownCoupon { code: "  fakecode " }
    ///      │
    ///      ▼
    /// UI shows: "Unknown coupon code: '  fakecode '"
    /// ```
    #[error("Unknown coupon code: '{code}'")]
    UnknownCoupon { code: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the shipping calculation and by the upstream validators in
/// [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below zero.
    #[error("{field} must not be negative (got {value})")]
    MustNotBeNegative { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// Name of the argument that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustNotBeNegative { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid pricing configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Malformed configuration document: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
