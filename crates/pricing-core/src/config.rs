//! # Pricing Configuration
//!
//! Rates and thresholds used by [`crate::calculator::PricingCalculator`].
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRICING_*`)
//! 2. A JSON document supplied by the caller
//! 3. Defaults (this file)
//!
//! Configuration is read-only once built. The free functions in
//! [`crate::calculator`] always use [`PricingConfig::default`].

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};
use crate::money::Money;
use crate::shipping::{ShippingPolicy, ShippingRates};
use crate::types::TaxRate;
use crate::validation::{validate_non_negative_money, ValidationResult};

/// Environment variable overriding the default tax rate (percent, e.g. `8.25`).
pub const ENV_DEFAULT_TAX_RATE: &str = "PRICING_DEFAULT_TAX_RATE";

/// Environment variable overriding the free-shipping threshold (e.g. `75.00`).
pub const ENV_FREE_SHIPPING_THRESHOLD: &str = "PRICING_FREE_SHIPPING_THRESHOLD";

/// Pricing configuration.
///
/// ## Default Values
/// - Tax: 8.5%
/// - Free domestic shipping from $50.00
/// - Domestic: $5.00 + $0.50/lb
/// - International: $15.00 + $2.50/lb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Tax rate used when a caller does not name one.
    pub default_tax_rate: TaxRate,

    /// Free-shipping threshold and rate tables.
    pub shipping: ShippingPolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            default_tax_rate: TaxRate::DEFAULT,
            shipping: ShippingPolicy::STANDARD,
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are an error.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PricingConfig::default();

        if let Some(raw) = lookup(ENV_DEFAULT_TAX_RATE) {
            config.default_tax_rate =
                TaxRate::from_percentage(parse_decimal(ENV_DEFAULT_TAX_RATE, &raw)?);
        }

        if let Some(raw) = lookup(ENV_FREE_SHIPPING_THRESHOLD) {
            config.shipping.free_shipping_threshold =
                Money::from_decimal(parse_decimal(ENV_FREE_SHIPPING_THRESHOLD, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON document. Missing fields keep defaults.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::config::PricingConfig;
    ///
    /// let config = PricingConfig::from_json(r#"{ "default_tax_rate": "7.25" }"#).unwrap();
    /// assert_eq!(config.default_tax_rate.percentage().to_string(), "7.25");
    /// assert_eq!(config.shipping.free_shipping_threshold.cents(), 5000);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects negative rates and thresholds.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.default_tax_rate.percentage() < Decimal::ZERO {
            return Err(ValidationError::MustNotBeNegative {
                field: "default_tax_rate".to_string(),
                value: self.default_tax_rate.percentage().to_string(),
            });
        }

        validate_non_negative_money(
            "free_shipping_threshold",
            self.shipping.free_shipping_threshold,
        )?;
        validate_rates("domestic", &self.shipping.domestic)?;
        validate_rates("international", &self.shipping.international)?;

        Ok(())
    }
}

fn validate_rates(prefix: &str, rates: &ShippingRates) -> ValidationResult<()> {
    validate_non_negative_money(&format!("{prefix}.base"), rates.base)?;
    validate_non_negative_money(&format!("{prefix}.per_lb"), rates.per_lb)
}

fn parse_decimal(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    Decimal::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
