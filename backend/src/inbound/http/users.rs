//! User lookup handler.
//!
//! ```text
//! GET /users/1
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::inbound::http::ApiResult;
use crate::inbound::http::not_found::record_or_missing;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_u32};

const USER_ID: FieldName = FieldName::path("user_id");

/// Raw path segment; converted with [`parse_u32`] so bad ids answer 422.
#[derive(Debug, Deserialize)]
pub struct UserPath {
    user_id: String,
}

/// Fetch a single user profile.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = u32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User profile, or a not-found sentinel in sentinel mode", body = crate::inbound::http::schemas::UserProfileSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 422, description = "user_id is not an integer", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_u32(&path.user_id, USER_ID)?;
    let user = state.users.find_user(user_id).await?;
    record_or_missing(state.not_found, "User", user)
}
