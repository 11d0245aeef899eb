//! Product - Catalog Product Record

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product code
    pub code: String,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// List price
    #[serde(alias = "price")]
    pub base_price: f64,
    /// Price after discounts, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    /// Units in stock
    #[serde(default)]
    pub quantity: u32,
    /// Status flag (active / in offer)
    #[serde(alias = "inOffer")]
    pub active: bool,
}

impl Product {
    /// Create a product with no final price and zero stock
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: f64,
        active: bool,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            base_price,
            final_price: None,
            quantity: 0,
            active,
        }
    }

    /// Set the final price
    pub fn with_final_price(mut self, final_price: f64) -> Self {
        self.final_price = Some(final_price);
        self
    }

    /// Price used by the price filters: the final price if known, else the base price
    pub fn effective_price(&self) -> f64 {
        self.final_price.unwrap_or(self.base_price)
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

/// Reject data sets in which a product code appears more than once
pub fn ensure_unique_codes(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.code.as_str()) {
            return Err(Error::DuplicateCode {
                code: product.code.clone(),
            });
        }
    }
    Ok(())
}

/// Distinct categories of the given products, sorted lexicographically
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_prefers_final_price() {
        let plain = Product::new("A1", "Widget", "Tools", 10.0, true);
        assert_eq!(plain.effective_price(), 10.0);

        let discounted = plain.with_final_price(8.5);
        assert_eq!(discounted.effective_price(), 8.5);
    }

    #[test]
    fn deserializes_source_field_names() {
        let json = r#"{
            "code": "P-001",
            "name": "Drill",
            "category": "Tools",
            "basePrice": 120.0,
            "finalPrice": 99.9,
            "quantity": 4,
            "active": true
        }"#;
        let product: Product = serde_json::from_str(json).expect("parse product");
        assert_eq!(product.code, "P-001");
        assert_eq!(product.final_price, Some(99.9));
        assert_eq!(product.quantity, 4);
        assert!(product.active);
    }

    #[test]
    fn deserializes_offer_variant_field_names() {
        let json = r#"{"code":"X","name":"Lamp","category":"Home","price":15,"inOffer":false}"#;
        let product: Product = serde_json::from_str(json).expect("parse product");
        assert_eq!(product.base_price, 15.0);
        assert_eq!(product.final_price, None);
        assert!(!product.active);
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let products = vec![
            Product::new("A1", "Widget", "Tools", 10.0, true),
            Product::new("A1", "Widget v2", "Tools", 12.0, true),
        ];
        let err = ensure_unique_codes(&products).expect_err("duplicate should fail");
        assert!(matches!(err, Error::DuplicateCode { code } if code == "A1"));
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let products = vec![
            Product::new("1", "a", "Tools", 1.0, true),
            Product::new("2", "b", "Garden", 1.0, true),
            Product::new("3", "c", "Tools", 1.0, false),
            Product::new("4", "d", "Electronics", 1.0, true),
        ];
        assert_eq!(categories(&products), vec!["Electronics", "Garden", "Tools"]);
    }
}
