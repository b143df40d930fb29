//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Inbound adapters depend only on these traits; the in-memory fixture
//! tables in `outbound::memory` implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_read_error;
mod items_query;
mod orders_query;
mod products_query;
mod restaurants_query;
mod users_query;

pub use catalogue_read_error::CatalogueReadError;
#[cfg(test)]
pub use items_query::MockItemsQuery;
pub use items_query::ItemsQuery;
#[cfg(test)]
pub use orders_query::MockOrdersQuery;
pub use orders_query::OrdersQuery;
#[cfg(test)]
pub use products_query::MockProductsQuery;
pub use products_query::ProductsQuery;
#[cfg(test)]
pub use restaurants_query::MockRestaurantsQuery;
pub use restaurants_query::RestaurantsQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
