//! Driving port for the product catalogue.

use async_trait::async_trait;

use crate::domain::{Page, Product, ProductFilter};

use super::CatalogueReadError;

/// Read-side port over the product table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Return products matching `filter` in table order, restricted to `page`.
    ///
    /// An empty filter yields the whole table (within the page).
    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, CatalogueReadError>;

    /// Return the product with `product_id`, or `None` when absent.
    async fn find_product(&self, product_id: u32) -> Result<Option<Product>, CatalogueReadError>;
}
