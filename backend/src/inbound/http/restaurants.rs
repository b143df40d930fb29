//! Restaurant listing handler combining a path parameter with query filters.
//!
//! ```text
//! GET /restaurants/1?cuisine=italian&min_rating=4
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::RestaurantFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, non_blank, parse_optional_min_rating, parse_u32,
};

const CITY_ID: FieldName = FieldName::path("city_id");
const MIN_RATING: FieldName = FieldName::query("min_rating");

#[derive(Debug, Deserialize)]
pub struct CityPath {
    city_id: String,
}

/// Optional narrowing of the city listing.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantListParams {
    cuisine: Option<String>,
    min_rating: Option<String>,
}

/// List restaurants in a city.
///
/// An unknown city is not an error; it simply has no restaurants.
#[utoipa::path(
    get,
    path = "/restaurants/{city_id}",
    params(
        ("city_id" = u32, Path, description = "City identifier"),
        ("cuisine" = Option<String>, Query, description = "Cuisine to match, case-insensitive"),
        ("min_rating" = Option<f32>, Query, description = "Minimum rating between 0 and 5, inclusive")
    ),
    responses(
        (status = 200, description = "Matching restaurants in table order", body = [crate::inbound::http::schemas::RestaurantSchema]),
        (status = 422, description = "Malformed city id or rating", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants"
)]
#[get("/restaurants/{city_id}")]
pub async fn list_restaurants(
    state: web::Data<HttpState>,
    path: web::Path<CityPath>,
    query: web::Query<RestaurantListParams>,
) -> ApiResult<HttpResponse> {
    let city_id = parse_u32(&path.city_id, CITY_ID)?;
    let RestaurantListParams {
        cuisine,
        min_rating,
    } = query.into_inner();
    let filter = RestaurantFilter {
        city_id,
        cuisine: non_blank(cuisine),
        min_rating: parse_optional_min_rating(min_rating, MIN_RATING)?,
    };
    debug!(?filter, "listing restaurants");

    let restaurants = state.restaurants.list_restaurants(&filter).await?;
    Ok(HttpResponse::Ok().json(restaurants))
}
