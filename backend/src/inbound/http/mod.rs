//! HTTP inbound adapter exposing the lookup endpoints.

pub mod bookings;
pub mod error;
pub mod extractors;
pub mod health;
pub mod items;
pub mod not_found;
pub mod orders;
pub mod products;
pub mod restaurants;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web;

pub use error::ApiResult;

/// Register the extractor error handlers, the health probes and every lookup
/// endpoint.
///
/// Endpoints sit in an empty-prefix scope that trims trailing slashes, so
/// `/products/` and `/products` resolve alike. The scope claims every path,
/// so register other services (docs) before calling this. The probes read a
/// `web::Data<health::HealthState>` registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use lookup_api::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractors::configure(cfg);
    cfg.service(
        web::scope("")
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .service(health::ready)
            .service(health::live)
            .service(users::get_user)
            .service(products::list_products)
            .service(products::get_product)
            .service(restaurants::list_restaurants)
            .service(items::list_items)
            .service(orders::list_orders)
            .service(bookings::create_booking),
    );
}
