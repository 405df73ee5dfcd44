//! Browser session: the single owner of the current criteria.
//!
//! Every interaction builds a new [`Criteria`] from the current one, replaces it
//! wholesale and re-derives the view from the full catalog. Nothing is patched
//! incrementally, so the view can never go stale relative to the criteria.

use storefront_catalog::{Catalog, CategoryFilter, Criteria, PriceRange, Product, SortOrder, price_bucket};
use storefront_core::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct BrowserSession {
    catalog: Catalog,
    criteria: Criteria,
    view: Vec<Product>,
}

impl BrowserSession {
    /// Start with default criteria (everything shown, source order).
    pub fn new(catalog: Catalog) -> Self {
        let criteria = Criteria::default();
        let view = catalog.derive(&criteria);
        Self {
            catalog,
            criteria,
            view,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    /// The current derived view.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Replace the criteria and re-derive.
    pub fn apply(&mut self, criteria: Criteria) -> &[Product] {
        self.criteria = criteria;
        self.view = self.catalog.derive(&self.criteria);
        tracing::debug!(
            search = %self.criteria.search,
            category = self.criteria.category.as_selection(),
            price = %self.criteria.price,
            sort = %self.criteria.sort,
            shown = self.view.len(),
            "criteria replaced"
        );
        &self.view
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> &[Product] {
        let next = self.criteria.clone().with_search(term);
        self.apply(next)
    }

    /// Select a category by raw selector value (`""` and `"all"` both clear it).
    pub fn select_category(&mut self, value: &str) -> &[Product] {
        let next = self.criteria.clone().with_category(CategoryFilter::from_selection(value));
        self.apply(next)
    }

    /// Replace the price range with a named bucket.
    pub fn select_price_bucket(&mut self, label: &str) -> DomainResult<&[Product]> {
        let range = price_bucket(label)?.range;
        Ok(self.set_price_range(range))
    }

    /// Replace the price range from a `"min,max"` option value.
    pub fn select_price_value(&mut self, value: &str) -> DomainResult<&[Product]> {
        let range: PriceRange = value.parse()?;
        Ok(self.set_price_range(range))
    }

    /// Bucket label first, then `"min,max"`. Criteria stay unchanged on error.
    pub fn select_price(&mut self, selection: &str) -> DomainResult<&[Product]> {
        let range = match price_bucket(selection) {
            Ok(bucket) => bucket.range,
            Err(_) => selection.parse::<PriceRange>().map_err(|_| {
                DomainError::validation(format!(
                    "price {selection:?} is neither a bucket label nor \"min,max\""
                ))
            })?,
        };
        Ok(self.set_price_range(range))
    }

    /// Select a sort order by option value; unknown values mean default order.
    pub fn select_sort(&mut self, value: &str) -> &[Product] {
        self.set_sort(SortOrder::from_option_value(value))
    }

    pub fn set_sort(&mut self, order: SortOrder) -> &[Product] {
        let next = self.criteria.clone().with_sort(order);
        self.apply(next)
    }

    fn set_price_range(&mut self, range: PriceRange) -> &[Product] {
        let next = self.criteria.clone().with_price(range);
        self.apply(next)
    }
}
