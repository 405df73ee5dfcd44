//! Product catalog browsing logic.
//!
//! Pure, deterministic domain code (no IO, no rendering): product records, the
//! filter/sort criteria value, the static option tables and the derivation
//! that turns (products, criteria) into the displayed list.

pub mod catalog;
pub mod collation;
pub mod criteria;
pub mod options;
pub mod product;
pub mod view;

pub use catalog::{Catalog, category_set};
pub use criteria::{CategoryFilter, Criteria, PriceRange, SortOrder};
pub use options::{PRICE_BUCKETS, PriceBucket, SORT_OPTIONS, SortOption, price_bucket, sort_option};
pub use product::Product;
pub use view::derive_view;
