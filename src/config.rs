//! Run configuration for the generator.
//!
//! Counts come from three layers: built-in defaults, an optional YAML file,
//! and command-line flags (highest precedence).

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of customers
pub const DEFAULT_CUSTOMER_COUNT: u64 = 100;
/// Default number of orders
pub const DEFAULT_ORDER_COUNT: u64 = 10_000;
/// Default upper bound on products linked to a single order
pub const DEFAULT_MAX_PRODUCTS_PER_ORDER: u64 = 3;

/// Runtime configuration consumed by [`crate::Generator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of customer rows (must be at least 1)
    pub customer_count: u64,
    /// Number of order rows (0 is allowed)
    pub order_count: u64,
    /// Number of product rows; 0 disables products and order links
    pub product_count: u64,
    /// Upper bound on distinct products linked to each order
    pub max_products_per_order: u64,
    /// Emit CREATE TABLE statements before the inserts
    pub include_schema: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            order_count: DEFAULT_ORDER_COUNT,
            product_count: 0,
            max_products_per_order: DEFAULT_MAX_PRODUCTS_PER_ORDER,
            include_schema: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new(customer_count: u64, order_count: u64) -> Self {
        Self {
            customer_count,
            order_count,
            ..Default::default()
        }
    }

    pub fn with_products(mut self, product_count: u64) -> Self {
        self.product_count = product_count;
        self
    }

    pub fn with_max_products_per_order(mut self, max: u64) -> Self {
        self.max_products_per_order = max;
        self
    }

    pub fn with_schema(mut self, include_schema: bool) -> Self {
        self.include_schema = include_schema;
        self
    }

    /// Check the invariants the generator relies on.
    ///
    /// Orders draw their customer from `1..=customer_count`, so an empty
    /// customer table has no valid draw.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.customer_count < 1 {
            return Err(GenerateError::invalid(
                "customer count must be at least 1 (orders reference customers)",
            ));
        }
        if self.product_count > 0 && self.max_products_per_order < 1 {
            return Err(GenerateError::invalid(
                "max products per order must be at least 1 when products are enabled",
            ));
        }
        Ok(())
    }

    /// Effective number of products per order, never more than exist
    pub fn products_per_order_bound(&self) -> u64 {
        self.max_products_per_order.min(self.product_count)
    }

    /// Apply values from a YAML file; fields absent from the file are untouched
    pub fn merge_yaml(&mut self, yaml: &SeedYamlConfig) {
        if let Some(n) = yaml.customer_count {
            self.customer_count = n;
        }
        if let Some(m) = yaml.order_count {
            self.order_count = m;
        }
        if let Some(p) = yaml.products {
            self.product_count = p;
        }
        if let Some(k) = yaml.max_products_per_order {
            self.max_products_per_order = k;
        }
        if let Some(schema) = yaml.include_schema {
            self.include_schema = schema;
        }
    }
}

/// YAML configuration file.
///
/// ```yaml
/// customerCount: 250
/// orderCount: 5000
/// products: 40
/// include_schema: true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedYamlConfig {
    #[serde(alias = "customerCount")]
    pub customer_count: Option<u64>,
    #[serde(alias = "orderCount")]
    pub order_count: Option<u64>,
    #[serde(alias = "productCount", alias = "product_count")]
    pub products: Option<u64>,
    #[serde(alias = "maxProductsPerOrder")]
    pub max_products_per_order: Option<u64>,
    #[serde(alias = "includeSchema")]
    pub include_schema: Option<bool>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: SeedYamlConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.customer_count, 100);
        assert_eq!(config.order_count, 10_000);
        assert_eq!(config.product_count, 0);
        assert!(!config.include_schema);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_customers_rejected() {
        let err = GeneratorConfig::new(0, 5).validate().unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_orders_allowed() {
        assert!(GeneratorConfig::new(1, 0).validate().is_ok());
    }

    #[test]
    fn test_zero_max_products_rejected_only_with_products() {
        let config = GeneratorConfig::new(1, 1).with_max_products_per_order(0);
        assert!(config.validate().is_ok());
        assert!(config.with_products(5).validate().is_err());
    }

    #[test]
    fn test_products_bound_clamped() {
        let config = GeneratorConfig::new(1, 1)
            .with_products(2)
            .with_max_products_per_order(10);
        assert_eq!(config.products_per_order_bound(), 2);
    }

    #[test]
    fn test_parse_camel_case_yaml() {
        let yaml = r#"
customerCount: 7
orderCount: 0
"#;
        let parsed = SeedYamlConfig::parse(yaml).unwrap();
        assert_eq!(parsed.customer_count, Some(7));
        assert_eq!(parsed.order_count, Some(0));
        assert_eq!(parsed.products, None);
    }

    #[test]
    fn test_merge_yaml_keeps_unset_fields() {
        let yaml = r#"
order_count: 42
include_schema: true
"#;
        let parsed = SeedYamlConfig::parse(yaml).unwrap();
        let mut config = GeneratorConfig::default();
        config.merge_yaml(&parsed);

        assert_eq!(config.customer_count, DEFAULT_CUSTOMER_COUNT);
        assert_eq!(config.order_count, 42);
        assert!(config.include_schema);
    }
}
