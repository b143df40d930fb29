//! Driving port for dated item listings.

use async_trait::async_trait;

use crate::domain::{Item, ItemFilter};

use super::CatalogueReadError;

/// Read-side port over the item table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsQuery: Send + Sync {
    /// Return items matching `filter` in table order.
    async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, CatalogueReadError>;
}
