//! Product aggregate model

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// A catalog product. `name` is the natural key; `category_id` references
/// an existing [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    /// Read-side binding populated by the service layer; never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Write model for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// Write model for updating a product.
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// Query filter understood by every product backend.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Substring match on the name (case-insensitive).
    pub name_contains: Option<String>,
    /// Restrict to products belonging to any of these categories;
    /// empty means all categories.
    pub category_ids: Vec<i64>,
    /// Exact match on the natural key.
    pub name_equals: Option<String>,
    /// Record id excluded from matching (uniqueness checks on update).
    pub exclude_id: Option<i64>,
}

impl ProductFilter {
    /// Filter for a name/category search.
    pub fn search(name: Option<String>, category_ids: Vec<i64>) -> Self {
        Self {
            name_contains: name.filter(|n| !n.is_empty()),
            category_ids,
            ..Self::default()
        }
    }

    /// Filter that matches records holding the given natural key,
    /// optionally excluding one record (the one being updated).
    pub fn natural_key(name: &str, exclude_id: Option<i64>) -> Self {
        Self {
            name_equals: Some(name.to_string()),
            exclude_id,
            ..Self::default()
        }
    }

    /// Filter that matches every product of one category.
    pub fn in_category(category_id: i64) -> Self {
        Self {
            category_ids: vec![category_id],
            ..Self::default()
        }
    }

    /// In-process evaluation used by the array-style backends.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name_contains {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if !self.category_ids.is_empty() && !self.category_ids.contains(&product.category_id) {
            return false;
        }
        if let Some(name) = &self.name_equals {
            if product.name != *name {
                return false;
            }
        }
        if self.exclude_id == Some(product.id) {
            return false;
        }
        true
    }
}
