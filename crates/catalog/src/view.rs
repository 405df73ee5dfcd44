//! Product view derivation.
//!
//! Maps (source list, [`Criteria`]) to the displayed list through a fixed
//! pipeline: search, category, price, then sort. Every stage is a pure function
//! returning a new sequence; the source list is only ever read.
//!
//! Degraded input never fails the derivation:
//! - a product without a usable price is dropped by any bounded price range
//!   and sorted after priced products by both price sorts;
//! - a product without a rating sorts after rated products;
//! - an invalid price range (`min > max`, NaN bound) disables the price stage.

use std::cmp::Ordering;

use crate::collation::locale_compare;
use crate::criteria::{CategoryFilter, Criteria, PriceRange, SortOrder};
use crate::product::Product;

/// Derive the displayed list from the full source list.
///
/// Output is a subset of `products` (by id) with no duplicates, in source
/// order unless `criteria.sort` says otherwise. All sorts are stable.
pub fn derive_view(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let matched = filter_by_search(products.iter(), &criteria.search);
    let matched = filter_by_category(matched, &criteria.category);
    let matched = filter_by_price(matched, criteria.price);
    let ordered = sort_products(matched, criteria.sort);

    tracing::debug!(
        source = products.len(),
        derived = ordered.len(),
        sort = %criteria.sort,
        "derived product view"
    );

    ordered.into_iter().cloned().collect()
}

/// Keep products whose name contains `term`, case-insensitively. An empty term
/// keeps everything; whitespace is a real term.
pub fn filter_by_search<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    term: &str,
) -> Vec<&'a Product> {
    if term.is_empty() {
        return products.into_iter().collect();
    }
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|p| p.name().to_lowercase().contains(&needle))
        .collect()
}

/// Keep products in the selected category (exact, case-sensitive).
pub fn filter_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| category.matches(p.category()))
        .collect()
}

/// Keep products priced within `range`, inclusive. Products without a usable
/// price never match a bounded range. An unbounded or invalid range matches
/// everything.
pub fn filter_by_price<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    range: PriceRange,
) -> Vec<&'a Product> {
    if range.is_unbounded() {
        return products.into_iter().collect();
    }
    if !range.is_valid() {
        tracing::warn!(min = range.min, max = range.max, "invalid price range; price filter disabled");
        return products.into_iter().collect();
    }
    products
        .into_iter()
        .filter(|p| p.price().is_some_and(|price| range.contains(price)))
        .collect()
}

/// Return a new, stably sorted sequence. `SortOrder::Default` keeps input order.
pub fn sort_products<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    order: SortOrder,
) -> Vec<&'a Product> {
    let mut sorted: Vec<&Product> = products.into_iter().collect();
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAscending => {
            sorted.sort_by(|a, b| present_first(a.price(), b.price(), f64::total_cmp))
        }
        SortOrder::PriceDescending => {
            sorted.sort_by(|a, b| present_first(a.price(), b.price(), |x, y| y.total_cmp(x)))
        }
        SortOrder::NameAscending => sorted.sort_by(|a, b| locale_compare(a.name(), b.name())),
        SortOrder::RatingAscending => {
            sorted.sort_by(|a, b| present_first(a.rating(), b.rating(), i64::cmp))
        }
    }
    sorted
}

/// Order present keys by `cmp`, absent keys after all present ones.
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
