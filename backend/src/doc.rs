//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every lookup endpoint, the booking endpoint, the
//! health probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`] that describe domain types without
//! coupling them to utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported by
//! the `openapi-dump` binary.

use crate::inbound::http::bookings::{
    BookingRequest, BookingResponse, ContactDetailsBody, FlightDetailsBody,
};
use crate::inbound::http::schemas::{
    BookingConfirmationSchema, ErrorCodeSchema, ErrorSchema, ItemSchema, NotFoundSentinelSchema,
    OrderSchema, OrderStatusSchema, ProductSchema, RestaurantSchema, UserProfileSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lookup API",
        description = "Path and query parameter lookups over in-memory fixture tables."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::items::list_items,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        NotFoundSentinelSchema,
        UserProfileSchema,
        ProductSchema,
        RestaurantSchema,
        OrderSchema,
        OrderStatusSchema,
        ItemSchema,
        BookingConfirmationSchema,
        BookingRequest,
        ContactDetailsBody,
        FlightDetailsBody,
        BookingResponse,
    )),
    tags(
        (name = "users", description = "User lookups by path parameter"),
        (name = "products", description = "Catalogue listing and lookup"),
        (name = "restaurants", description = "Restaurants filtered by city and query"),
        (name = "items", description = "Items filtered by availability date"),
        (name = "orders", description = "Orders filtered by product and status"),
        (name = "bookings", description = "Flight booking validation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
