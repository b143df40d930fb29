//! In-memory fixture tables.
//!
//! Tables are built once at startup, validated for unique keys, and shared
//! read-only across worker threads behind an `Arc`. Every query port is a
//! linear scan that preserves table order.

mod queries;
mod seed;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::CatalogueReadError;
use crate::domain::{Item, Order, Product, Restaurant, UserProfile};

/// Parameter object carrying the raw rows for each table.
#[derive(Debug, Clone, Default)]
pub struct FixtureRows {
    pub users: Vec<UserProfile>,
    pub products: Vec<Product>,
    pub restaurants: Vec<Restaurant>,
    pub orders: Vec<Order>,
    pub items: Vec<Item>,
}

#[derive(Debug)]
struct Tables {
    users: Vec<UserProfile>,
    products: Vec<Product>,
    restaurants: Vec<Restaurant>,
    orders: Vec<Order>,
    items: Vec<Item>,
}

/// Shared handle over the fixture tables; cheap to clone.
///
/// # Examples
/// ```
/// use lookup_api::outbound::memory::FixtureTables;
///
/// let tables = FixtureTables::seeded().expect("seed data is consistent");
/// assert!(tables.row_count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct FixtureTables {
    tables: Arc<Tables>,
}

fn ensure_unique_keys<T>(
    table: &str,
    rows: &[T],
    key: impl Fn(&T) -> u32,
) -> Result<(), CatalogueReadError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let id = key(row);
        if !seen.insert(id) {
            return Err(CatalogueReadError::corrupt(format!(
                "duplicate id {id} in {table}"
            )));
        }
    }
    Ok(())
}

impl FixtureTables {
    /// Build tables from explicit rows, rejecting duplicate keys.
    pub fn new(rows: FixtureRows) -> Result<Self, CatalogueReadError> {
        let FixtureRows {
            users,
            products,
            restaurants,
            orders,
            items,
        } = rows;
        ensure_unique_keys("users", &users, UserProfile::id)?;
        ensure_unique_keys("products", &products, Product::id)?;
        ensure_unique_keys("restaurants", &restaurants, Restaurant::id)?;
        ensure_unique_keys("orders", &orders, Order::id)?;
        ensure_unique_keys("items", &items, Item::id)?;

        let tables = Tables {
            users,
            products,
            restaurants,
            orders,
            items,
        };
        debug!(
            users = tables.users.len(),
            products = tables.products.len(),
            restaurants = tables.restaurants.len(),
            orders = tables.orders.len(),
            items = tables.items.len(),
            "fixture tables loaded"
        );
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Build tables from the bundled fixture data.
    pub fn seeded() -> Result<Self, CatalogueReadError> {
        Self::new(seed::rows()?)
    }

    /// Total rows across every table.
    pub fn row_count(&self) -> usize {
        let Tables {
            users,
            products,
            restaurants,
            orders,
            items,
        } = self.tables.as_ref();
        users.len() + products.len() + restaurants.len() + orders.len() + items.len()
    }
}
