//! Query port implementations over the fixture tables.

use async_trait::async_trait;

use crate::domain::ports::{
    CatalogueReadError, ItemsQuery, OrdersQuery, ProductsQuery, RestaurantsQuery, UsersQuery,
};
use crate::domain::{
    Item, ItemFilter, Order, OrderFilter, Page, Product, ProductFilter, Restaurant,
    RestaurantFilter, UserProfile,
};

use super::FixtureTables;

#[async_trait]
impl UsersQuery for FixtureTables {
    async fn find_user(&self, user_id: u32) -> Result<Option<UserProfile>, CatalogueReadError> {
        Ok(self
            .tables
            .users
            .iter()
            .find(|user| user.id() == user_id)
            .cloned())
    }
}

#[async_trait]
impl ProductsQuery for FixtureTables {
    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, CatalogueReadError> {
        let matching = self
            .tables
            .products
            .iter()
            .filter(|product| filter.matches(product));
        Ok(page.apply(matching).cloned().collect())
    }

    async fn find_product(&self, product_id: u32) -> Result<Option<Product>, CatalogueReadError> {
        Ok(self
            .tables
            .products
            .iter()
            .find(|product| product.id() == product_id)
            .cloned())
    }
}

#[async_trait]
impl RestaurantsQuery for FixtureTables {
    async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, CatalogueReadError> {
        Ok(self
            .tables
            .restaurants
            .iter()
            .filter(|restaurant| filter.matches(restaurant))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrdersQuery for FixtureTables {
    async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, CatalogueReadError> {
        Ok(self
            .tables
            .orders
            .iter()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ItemsQuery for FixtureTables {
    async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, CatalogueReadError> {
        Ok(self
            .tables
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }
}
