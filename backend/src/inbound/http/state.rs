//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without the fixture tables.

use std::sync::Arc;

use crate::domain::ports::{ItemsQuery, OrdersQuery, ProductsQuery, RestaurantsQuery, UsersQuery};
use crate::outbound::memory::FixtureTables;

use super::not_found::NotFoundStyle;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersQuery>,
    pub products: Arc<dyn ProductsQuery>,
    pub restaurants: Arc<dyn RestaurantsQuery>,
    pub orders: Arc<dyn OrdersQuery>,
    pub items: Arc<dyn ItemsQuery>,
}

impl From<FixtureTables> for HttpStatePorts {
    fn from(tables: FixtureTables) -> Self {
        Self {
            users: Arc::new(tables.clone()),
            products: Arc::new(tables.clone()),
            restaurants: Arc::new(tables.clone()),
            orders: Arc::new(tables.clone()),
            items: Arc::new(tables),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub products: Arc<dyn ProductsQuery>,
    pub restaurants: Arc<dyn RestaurantsQuery>,
    pub orders: Arc<dyn OrdersQuery>,
    pub items: Arc<dyn ItemsQuery>,
    pub not_found: NotFoundStyle,
}

impl HttpState {
    /// Construct state from a ports bundle and the not-found policy.
    ///
    /// # Examples
    /// ```
    /// use lookup_api::inbound::http::not_found::NotFoundStyle;
    /// use lookup_api::inbound::http::state::{HttpState, HttpStatePorts};
    /// use lookup_api::outbound::memory::FixtureTables;
    ///
    /// let tables = FixtureTables::seeded().expect("seed data is consistent");
    /// let state = HttpState::new(HttpStatePorts::from(tables), NotFoundStyle::Status);
    /// assert_eq!(state.not_found, NotFoundStyle::Status);
    /// ```
    pub fn new(ports: HttpStatePorts, not_found: NotFoundStyle) -> Self {
        let HttpStatePorts {
            users,
            products,
            restaurants,
            orders,
            items,
        } = ports;
        Self {
            users,
            products,
            restaurants,
            orders,
            items,
            not_found,
        }
    }
}
