//! Filter - Catalog Filter Form and Criteria
//!
//! [`FilterForm`] holds the raw text of the filter fields as the user typed
//! them. [`FilterCriteria`] is the parsed form the engine works with; parsing
//! never fails, unusable input simply means "no constraint".

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Status selector for the active flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No constraint
    #[default]
    Any,
    /// Only active products ("yes")
    Active,
    /// Only inactive products ("no")
    Inactive,
}

impl StatusFilter {
    /// Parse the select value used by the form ("", "yes", "no")
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "yes" => StatusFilter::Active,
            "no" => StatusFilter::Inactive,
            _ => StatusFilter::Any,
        }
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            StatusFilter::Any => "",
            StatusFilter::Active => "yes",
            StatusFilter::Inactive => "no",
        }
    }

    fn matches(&self, active: bool) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Active => active,
            StatusFilter::Inactive => !active,
        }
    }
}

/// Raw filter form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    pub query: String,
    pub category: String,
    pub activated: String,
    pub min_price: String,
    pub max_price: String,
}

impl FilterForm {
    /// Parse the form into criteria
    pub fn criteria(&self) -> FilterCriteria {
        let category = self.category.trim();
        FilterCriteria {
            query: self.query.trim().to_lowercase(),
            category: (!category.is_empty()).then(|| category.to_string()),
            status: StatusFilter::from_form_value(&self.activated),
            min_price: parse_price("minPrice", &self.min_price),
            max_price: parse_price("maxPrice", &self.max_price),
        }
    }
}

/// Parse a price field; empty or non-numeric text yields `None`
fn parse_price(field: &str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::debug!("Ignoring non-numeric {}: {:?}", field, raw);
            None
        }
    }
}

/// Parsed filter criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Lowercased search text; empty means no constraint
    pub query: String,
    pub category: Option<String>,
    pub status: StatusFilter,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Whether every field is unset
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.category.is_none()
            && self.status == StatusFilter::Any
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Check a single product against all active constraints
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.status.matches(product.active)
            && self.matches_price(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        self.query.is_empty()
            || product.code.to_lowercase().contains(&self.query)
            || product.name.to_lowercase().contains(&self.query)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category == category)
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.effective_price();
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }
}

/// Products matching `criteria`, in store order
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    if criteria.is_unconstrained() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
