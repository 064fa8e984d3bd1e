//! Category aggregate model

use serde::{Deserialize, Serialize};

/// A product category. `name` is the natural key, unique across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Write model for creating a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}

/// Write model for updating a category.
#[derive(Debug, Clone)]
pub struct CategoryChanges {
    pub name: String,
}

/// Query filter understood by every category backend.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Substring match on the name (case-sensitive).
    pub name_contains: Option<String>,
    /// Exact match on the natural key.
    pub name_equals: Option<String>,
    /// Record id excluded from matching (uniqueness checks on update).
    pub exclude_id: Option<i64>,
}

impl CategoryFilter {
    /// Filter for a name search.
    pub fn search(name: Option<String>) -> Self {
        Self {
            name_contains: name.filter(|n| !n.is_empty()),
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

    /// In-process evaluation used by the array-style backends.
    pub fn matches(&self, category: &Category) -> bool {
        if let Some(name) = &self.name_contains {
            if !category.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(name) = &self.name_equals {
            if category.name != *name {
                return false;
            }
        }
        if self.exclude_id == Some(category.id) {
            return false;
        }
        true
    }
}
