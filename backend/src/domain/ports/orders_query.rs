//! Driving port for order listings.

use async_trait::async_trait;

use crate::domain::{Order, OrderFilter};

use super::CatalogueReadError;

/// Read-side port over the order table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Return orders matching `filter` in table order.
    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, CatalogueReadError>;
}
