//! Domain primitives, filters, and ports.
//!
//! Purpose: define the fixture entities served by the API, the predicates
//! that select them, and the transport-agnostic error type. Nothing here
//! depends on actix.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and stable identifier.
//! - TraceId: request-scoped correlation identifier.
//! - Entities: UserProfile, Product, Restaurant, Order, Item, Booking.
//! - Filters: ProductFilter, RestaurantFilter, OrderFilter, ItemFilter, Page.

pub mod booking;
pub mod error;
pub mod item;
pub mod order;
pub mod page;
pub mod ports;
pub mod product;
pub mod restaurant;
pub mod trace_id;
pub mod user;

pub use self::booking::{
    Booking, BookingConfirmation, BookingField, BookingValidationError, ContactDetails,
    FlightDetails,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{DATE_FORMAT, Item, ItemFilter, parse_date};
pub use self::order::{Order, OrderFilter, OrderStatus, UnknownOrderStatus};
pub use self::page::{DEFAULT_LIMIT, DEFAULT_SKIP, LimitOutOfRange, MAX_LIMIT, Page};
pub use self::product::{PriceRange, PriceRangeError, Product, ProductFilter};
pub use self::restaurant::{
    MinRating, RATING_MAX, RATING_MIN, RatingOutOfRange, Restaurant, RestaurantFilter,
};
pub use self::trace_id::TraceId;
pub use self::user::UserProfile;

/// Header carrying the trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";
