//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A path, query, or body parameter failed validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The fixture store cannot serve the request.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message. Validation failures carry `{location, field, value, code}` in
/// `details`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user_id must be a non-negative integer")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// Sentinel body returned with 200 when lookups use the `sentinel` style.
#[derive(ToSchema)]
pub struct NotFoundSentinelSchema {
    #[schema(example = "User not found")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile)]
pub struct UserProfileSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = "john_doe")]
    username: String,
    #[schema(example = "john@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Product`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Product)]
pub struct ProductSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = "Laptop")]
    name: String,
    #[schema(example = "electronics")]
    category: String,
    #[schema(example = 999.99)]
    price: f64,
}

/// OpenAPI schema for [`crate::domain::Restaurant`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Restaurant)]
pub struct RestaurantSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = "Pasta Palace")]
    name: String,
    #[schema(example = 1)]
    city_id: u32,
    #[schema(example = "Italian")]
    cuisine: String,
    /// Rating between 0 and 5.
    #[schema(example = 4.5)]
    rating: f32,
}

/// OpenAPI schema for [`crate::domain::OrderStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::OrderStatus)]
pub enum OrderStatusSchema {
    #[schema(rename = "pending")]
    Pending,
    #[schema(rename = "shipped")]
    Shipped,
    #[schema(rename = "delivered")]
    Delivered,
    #[schema(rename = "cancelled")]
    Cancelled,
}

/// OpenAPI schema for [`crate::domain::Order`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Order)]
pub struct OrderSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = 1)]
    product_id: u32,
    #[schema(example = 2)]
    quantity: u32,
    status: OrderStatusSchema,
}

/// OpenAPI schema for [`crate::domain::Item`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Item)]
pub struct ItemSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = "Tent")]
    name: String,
    /// First day the item can be booked, `YYYY-MM-DD`.
    #[schema(example = "2024-01-10", format = Date)]
    available_from: String,
}

/// OpenAPI schema for [`crate::domain::BookingConfirmation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingConfirmation)]
pub struct BookingConfirmationSchema {
    #[schema(example = "John Doe")]
    customer_name: String,
    #[schema(example = 25)]
    customer_age: u32,
    #[schema(example = "user@example.com")]
    customer_email: String,
    /// RFC 3966 `tel:` URI.
    #[schema(example = "tel:+234-812-345-6789")]
    customer_phone: String,
    #[schema(example = "Lagos")]
    flight_origin: String,
    #[schema(example = "Abuja")]
    flight_destination: String,
    #[schema(example = "2021-12-25")]
    flight_date: String,
    #[schema(example = "A1")]
    seat_preference: String,
}
