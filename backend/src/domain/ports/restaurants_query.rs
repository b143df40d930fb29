//! Driving port for per-city restaurant listings.

use async_trait::async_trait;

use crate::domain::{Restaurant, RestaurantFilter};

use super::CatalogueReadError;

/// Read-side port over the restaurant table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantsQuery: Send + Sync {
    /// Return restaurants matching `filter` in table order.
    ///
    /// A city without restaurants yields an empty list, not an error.
    async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, CatalogueReadError>;
}
