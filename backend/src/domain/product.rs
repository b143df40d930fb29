//! Product records and the catalogue filter.
//!
//! A [`ProductFilter`] combines an optional category with an optional
//! inclusive [`PriceRange`]; an empty filter matches every product.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Separator between the bounds of a textual price range (`"10-50"`).
pub const PRICE_RANGE_SEPARATOR: char = '-';

/// Product offered in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: u32,
    name: String,
    category: String,
    price: f64,
}

impl Product {
    /// Build a product from its parts.
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Numeric product identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Catalogue category, for example `electronics`.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Reasons a textual price range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceRangeError {
    #[error("price range must have the form min-max")]
    MissingSeparator,
    #[error("price bound `{0}` is not a non-negative number")]
    InvalidBound(String),
    #[error("minimum price must not exceed maximum price")]
    Inverted,
}

/// Inclusive price interval.
///
/// # Examples
/// ```
/// use lookup_api::domain::PriceRange;
///
/// let range: PriceRange = "10-50".parse().expect("valid range");
/// assert!(range.contains(10.0));
/// assert!(range.contains(50.0));
/// assert!(!range.contains(50.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Build a range from explicit bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, PriceRangeError> {
        for bound in [min, max] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(PriceRangeError::InvalidBound(bound.to_string()));
            }
        }
        if min > max {
            return Err(PriceRangeError::Inverted);
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `price` lies within the range, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

fn parse_bound(raw: &str) -> Result<f64, PriceRangeError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| PriceRangeError::InvalidBound(trimmed.to_owned()))
}

impl FromStr for PriceRange {
    type Err = PriceRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(PRICE_RANGE_SEPARATOR)
            .ok_or(PriceRangeError::MissingSeparator)?;
        Self::new(parse_bound(min)?, parse_bound(max)?)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PRICE_RANGE_SEPARATOR}{}", self.min, self.max)
    }
}

/// Predicates applied to the product table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive category match.
    pub category: Option<String>,
    /// Inclusive price interval.
    pub price: Option<PriceRange>,
}

impl ProductFilter {
    /// Whether `product` satisfies every supplied predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category().to_lowercase() == category.to_lowercase());
        let price_ok = self.price.is_none_or(|range| range.contains(product.price()));
        category_ok && price_ok
    }
}
