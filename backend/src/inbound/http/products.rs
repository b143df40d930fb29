//! Product catalogue handlers.
//!
//! ```text
//! GET /products/?category=electronics&price_range=50-600&skip=0&limit=10
//! GET /products/3
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ProductFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::not_found::record_or_missing;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, non_blank, parse_optional_price_range, parse_page, parse_u32,
};

const PRODUCT_ID: FieldName = FieldName::path("product_id");
const PRICE_RANGE: FieldName = FieldName::query("price_range");
const SKIP: FieldName = FieldName::query("skip");
const LIMIT: FieldName = FieldName::query("limit");

/// Raw query string for `GET /products/`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    category: Option<String>,
    price_range: Option<String>,
    skip: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductPath {
    product_id: String,
}

/// List products, optionally filtered by category and price range.
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("category" = Option<String>, Query, description = "Category to match, case-insensitive"),
        ("price_range" = Option<String>, Query, description = "Inclusive price interval written `min-max`, for example `10-50`"),
        ("skip" = Option<usize>, Query, description = "Matching products to skip, default 0"),
        ("limit" = Option<usize>, Query, description = "Products to return, default 10, max 100")
    ),
    responses(
        (status = 200, description = "Matching products in catalogue order", body = [crate::inbound::http::schemas::ProductSchema]),
        (status = 422, description = "Malformed price range or page bounds", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    query: web::Query<ProductListParams>,
) -> ApiResult<HttpResponse> {
    let ProductListParams {
        category,
        price_range,
        skip,
        limit,
    } = query.into_inner();
    let filter = ProductFilter {
        category: non_blank(category),
        price: parse_optional_price_range(price_range, PRICE_RANGE)?,
    };
    let page = parse_page(skip, limit, SKIP, LIMIT)?;
    debug!(?filter, skip = page.skip(), limit = page.limit(), "listing products");

    let products = state.products.list_products(&filter, page).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Fetch a single product.
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(("product_id" = u32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product, or a not-found sentinel in sentinel mode", body = crate::inbound::http::schemas::ProductSchema),
        (status = 404, description = "No such product", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 422, description = "product_id is not an integer", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{product_id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<ProductPath>,
) -> ApiResult<HttpResponse> {
    let product_id = parse_u32(&path.product_id, PRODUCT_ID)?;
    let product = state.products.find_product(product_id).await?;
    record_or_missing(state.not_found, "Product", product)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::Page;
    use crate::domain::ports::MockProductsQuery;
    use crate::inbound::http::not_found::NotFoundStyle;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{fixture_ports, fixture_state, get_json, ids};

    #[rstest]
    #[case("/products/", vec![1, 2, 3, 4, 5, 6])]
    #[case("/products", vec![1, 2, 3, 4, 5, 6])]
    #[case("/products/?category=electronics", vec![1, 2, 3])]
    #[case("/products/?category=BOOKS", vec![4, 5])]
    #[case("/products/?price_range=20-100", vec![3, 4, 5])]
    #[case("/products/?category=electronics&price_range=50-600", vec![2, 3])]
    #[case("/products/?category=garden", vec![])]
    #[case("/products/?category=", vec![1, 2, 3, 4, 5, 6])]
    #[case("/products/?skip=2&limit=3", vec![3, 4, 5])]
    #[case("/products/?category=electronics&skip=1&limit=1", vec![2])]
    #[case("/products/?skip=10", vec![])]
    #[actix_web::test]
    async fn lists_matching_products(#[case] uri: &str, #[case] expected: Vec<u64>) {
        let (status, body) = get_json(fixture_state(NotFoundStyle::Status), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), expected);
    }

    #[rstest]
    #[case("/products/?price_range=50", "price_range", "invalid_format")]
    #[case("/products/?price_range=100-10", "price_range", "invalid_format")]
    #[case("/products/?price_range=cheap-dear", "price_range", "invalid_format")]
    #[case("/products/?limit=0", "limit", "out_of_range")]
    #[case("/products/?limit=101", "limit", "out_of_range")]
    #[case("/products/?skip=-1", "skip", "invalid_integer")]
    #[actix_web::test]
    async fn rejects_invalid_query_parameters(
        #[case] uri: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let (status, body) = get_json(fixture_state(NotFoundStyle::Status), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["location"], "query");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn default_page_is_forwarded_to_port() {
        let mut products = MockProductsQuery::new();
        products
            .expect_list_products()
            .withf(|filter, page| filter.category.is_none() && *page == Page::default())
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        let mut ports = fixture_ports();
        ports.products = Arc::new(products);

        let (status, body) =
            get_json(HttpState::new(ports, NotFoundStyle::Status), "/products/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn known_product_is_returned() {
        let (status, body) = get_json(fixture_state(NotFoundStyle::Status), "/products/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 4, "name": "Rust in Action", "category": "books", "price": 39.99 })
        );
    }

    #[rstest]
    #[case(NotFoundStyle::Status, StatusCode::NOT_FOUND)]
    #[case(NotFoundStyle::Sentinel, StatusCode::OK)]
    #[actix_web::test]
    async fn unknown_product_follows_configured_style(
        #[case] style: NotFoundStyle,
        #[case] expected: StatusCode,
    ) {
        let (status, body) = get_json(fixture_state(style), "/products/99").await;
        assert_eq!(status, expected);
        let message = match style {
            NotFoundStyle::Status => &body["message"],
            NotFoundStyle::Sentinel => &body["error"],
        };
        assert_eq!(message, "Product not found");
    }

    #[actix_web::test]
    async fn non_integer_product_id_is_unprocessable() {
        let (status, body) =
            get_json(fixture_state(NotFoundStyle::Sentinel), "/products/laptop").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["field"], "product_id");
        assert_eq!(body["details"]["location"], "path");
    }
}
