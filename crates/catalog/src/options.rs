//! Static option tables offered by the price and sort selectors.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult};

use crate::criteria::{PriceRange, SortOrder};

/// A named, preconfigured price interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBucket {
    pub label: &'static str,
    pub range: PriceRange,
}

/// A sort selector entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: SortOrder,
    pub label: &'static str,
}

/// Price buckets in selector order. "All" is the unbounded range, so picking it
/// restores the default view.
pub static PRICE_BUCKETS: [PriceBucket; 7] = [
    PriceBucket { label: "All", range: PriceRange::ANY },
    PriceBucket { label: "Under 1000", range: PriceRange::between(0.0, 1000.0) },
    PriceBucket { label: "1000 - 5000", range: PriceRange::between(1000.0, 5000.0) },
    PriceBucket { label: "5000 - 10000", range: PriceRange::between(5000.0, 10000.0) },
    PriceBucket { label: "10000 - 20000", range: PriceRange::between(10000.0, 20000.0) },
    PriceBucket { label: "20000-50000", range: PriceRange::between(20000.0, 50000.0) },
    PriceBucket { label: "Above 50000", range: PriceRange::between(50000.0, 1_000_000.0) },
];

pub static SORT_OPTIONS: [SortOption; 5] = [
    SortOption { value: SortOrder::Default, label: "Default" },
    SortOption { value: SortOrder::PriceAscending, label: "Price: Low to High" },
    SortOption { value: SortOrder::PriceDescending, label: "Price: High to Low" },
    SortOption { value: SortOrder::NameAscending, label: "Name: A to Z" },
    SortOption { value: SortOrder::RatingAscending, label: "Rating" },
];

impl PriceBucket {
    /// Selector option value (`"min,max"`).
    pub fn option_value(&self) -> String {
        self.range.to_string()
    }
}

/// Look up a price bucket by its label (case-insensitive).
pub fn price_bucket(label: &str) -> DomainResult<&'static PriceBucket> {
    PRICE_BUCKETS
        .iter()
        .find(|bucket| bucket.label.eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| DomainError::not_found(format!("price bucket {label:?}")))
}

pub fn sort_option(order: SortOrder) -> &'static SortOption {
    // Every SortOrder has exactly one entry.
    SORT_OPTIONS
        .iter()
        .find(|option| option.value == order)
        .unwrap_or(&SORT_OPTIONS[0])
}
