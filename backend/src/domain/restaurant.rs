//! Restaurant records and the city listing filter.

use serde::Serialize;

/// Lowest rating a restaurant can hold.
pub const RATING_MIN: f32 = 0.0;
/// Highest rating a restaurant can hold.
pub const RATING_MAX: f32 = 5.0;

/// Restaurant listed under a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    id: u32,
    name: String,
    city_id: u32,
    cuisine: String,
    rating: f32,
}

impl Restaurant {
    /// Build a restaurant from its parts.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        city_id: u32,
        cuisine: impl Into<String>,
        rating: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city_id,
            cuisine: cuisine.into(),
            rating,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn city_id(&self) -> u32 {
        self.city_id
    }

    pub fn cuisine(&self) -> &str {
        self.cuisine.as_str()
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }
}

/// Rejected minimum rating.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("rating {0} is outside {RATING_MIN}..={RATING_MAX}")]
pub struct RatingOutOfRange(pub f32);

/// Lower bound on restaurant rating, guaranteed to lie in the rating scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinRating(f32);

impl MinRating {
    /// Validate a rating threshold.
    pub fn new(value: f32) -> Result<Self, RatingOutOfRange> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Predicates for listing restaurants in one city.
///
/// The city is always required; cuisine and rating narrow the result.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFilter {
    pub city_id: u32,
    pub cuisine: Option<String>,
    pub min_rating: Option<MinRating>,
}

impl RestaurantFilter {
    /// Filter restaurants in `city_id` without further predicates.
    pub fn for_city(city_id: u32) -> Self {
        Self {
            city_id,
            cuisine: None,
            min_rating: None,
        }
    }

    /// Whether `restaurant` satisfies the city and every optional predicate.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if restaurant.city_id() != self.city_id {
            return false;
        }
        let cuisine_ok = self
            .cuisine
            .as_deref()
            .is_none_or(|cuisine| restaurant.cuisine().to_lowercase() == cuisine.to_lowercase());
        let rating_ok = self
            .min_rating
            .is_none_or(|min| restaurant.rating() >= min.value());
        cuisine_ok && rating_ok
    }
}
