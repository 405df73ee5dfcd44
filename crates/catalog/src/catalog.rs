//! The loaded product list and the values computed once from it.

use std::collections::HashSet;
use std::sync::Arc;

use storefront_core::entity::first_duplicate_id;
use storefront_core::{DomainError, DomainResult};

use crate::criteria::Criteria;
use crate::product::Product;
use crate::view::derive_view;

/// Distinct category labels, each exactly once, in first-appearance order.
pub fn category_set(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(Product::category)
        .filter(|category| seen.insert(*category))
        .map(str::to_string)
        .collect()
}

/// Immutable, id-unique product list shared by every derivation.
///
/// Cloning is cheap (the products live behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    categories: Arc<[String]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        if let Some(id) = first_duplicate_id(&products) {
            return Err(DomainError::invariant(format!("duplicate product id {id}")));
        }
        let categories = category_set(&products).into();
        Ok(Self {
            products: products.into(),
            categories,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Derive the view for `criteria` from the full list.
    pub fn derive(&self, criteria: &Criteria) -> Vec<Product> {
        derive_view(&self.products, criteria)
    }
}
