//! In-memory storage tables
//!
//! Demo backend state: non-durable, process-local. Nothing serializes
//! writers against the check-then-act validation window, which is
//! acceptable only because this backend exists for demos and tests.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use serde::Deserialize;

use crate::domain::{Category, Product};

/// Bundled demo catalog loaded by [`MemoryStore::seeded`].
const SEED: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-memory tables shared by the memory repositories.
pub struct MemoryStore {
    pub(super) categories: DashMap<i64, Category>,
    pub(super) products: DashMap<i64, Product>,
    category_seq: AtomicI64,
    product_seq: AtomicI64,
}

impl MemoryStore {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
            products: DashMap::new(),
            category_seq: AtomicI64::new(1),
            product_seq: AtomicI64::new(1),
        }
    }

    /// Store pre-populated with the bundled demo catalog.
    pub fn seeded() -> Self {
        let store = Self::new();
        let seed: SeedData =
            serde_json::from_str(SEED).expect("bundled seed data must be valid JSON");

        let mut max_category = 0;
        for category in seed.categories {
            max_category = max_category.max(category.id);
            store.categories.insert(category.id, category);
        }
        let mut max_product = 0;
        for product in seed.products {
            max_product = max_product.max(product.id);
            store.products.insert(product.id, product);
        }

        store.category_seq.store(max_category + 1, Ordering::SeqCst);
        store.product_seq.store(max_product + 1, Ordering::SeqCst);
        store
    }

    pub(super) fn next_category_id(&self) -> i64 {
        self.category_seq.fetch_add(1, Ordering::SeqCst)
    }

    pub(super) fn next_product_id(&self) -> i64 {
        self.product_seq.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
