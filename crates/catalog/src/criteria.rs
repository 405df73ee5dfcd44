//! Filter/sort criteria: one immutable value describing what the user asked for.
//!
//! The presentation layer keeps a single current [`Criteria`] and replaces it
//! wholesale on every interaction, then calls
//! [`derive_view`](crate::view::derive_view) again.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Category selection.
///
/// `All` is the only match-all representation. Raw selector values are mapped
/// onto it by [`CategoryFilter::from_selection`], so `""` and `"all"` can never
/// disagree downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Option value the match-all entry is rendered with.
    pub const ALL_VALUE: &'static str = "all";

    /// Normalize a raw selector value. Both the empty string and `"all"` mean
    /// "no category filter"; anything else is an exact label.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() || value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn only(label: impl Into<String>) -> Self {
        Self::from_selection(&label.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact, case-sensitive label match.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == category,
        }
    }

    pub fn as_selection(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(label) => label.as_str(),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from_selection(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_selection().to_string()
    }
}

/// Closed price interval `[min, max]`, inclusive on both ends.
///
/// Encoded as `"min,max"` (the selector option value) by `Display`/`FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Every non-negative price.
    pub const ANY: PriceRange = PriceRange::between(0.0, f64::MAX);

    /// Build a range without validation (used for static tables and for raw
    /// input that is checked later via [`PriceRange::is_valid`]).
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validated constructor: both bounds must be numbers and `min <= max`.
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        let range = Self::between(min, max);
        if range.is_valid() {
            Ok(range)
        } else {
            Err(DomainError::validation(format!(
                "price range [{min}, {max}] must satisfy min <= max"
            )))
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan() && self.min <= self.max
    }

    /// Covers every non-negative price, so filtering by it is a no-op.
    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max >= f64::MAX
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(',')
            .ok_or_else(|| DomainError::validation(format!("price range {s:?} is not \"min,max\"")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| DomainError::validation(format!("price bound {part:?}: {e}")))
        };
        Self::new(parse(min)?, parse(max)?)
    }
}

/// Sort order applied as the last derivation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep source order (restricted to matches).
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[serde(rename = "name-az")]
    NameAscending,
    #[serde(rename = "rating")]
    RatingAscending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
        SortOrder::NameAscending,
        SortOrder::RatingAscending,
    ];

    /// Option value used by the sort selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAscending => "price-asc",
            SortOrder::PriceDescending => "price-desc",
            SortOrder::NameAscending => "name-az",
            SortOrder::RatingAscending => "rating",
        }
    }

    /// Lenient parse for raw selector input: unknown values fall back to
    /// [`SortOrder::Default`] instead of failing the derivation.
    pub fn from_option_value(value: &str) -> Self {
        match value.parse() {
            Ok(order) => order,
            Err(_) => {
                tracing::warn!(value, "unknown sort order; falling back to default order");
                SortOrder::Default
            }
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort order {s:?}")))
    }
}

/// The combined current filter and sort selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Criteria {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// True when no stage would change the source list.
    pub fn is_noop(&self) -> bool {
        self.search.is_empty()
            && self.category.is_all()
            && self.price == PriceRange::ANY
            && self.sort == SortOrder::Default
    }
}
