use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        messages::{
            PRODUCT_NOT_FOUND, PRODUCT_NOT_FOUND_OR_DELETED, PRODUCT_NOT_FOUND_OR_NOT_DELETED,
        },
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::{CreatedResponse, MessageResponse},
            product::ProductResponse,
        },
    },
    middleware::json::JsonBody,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Reads a path id the way MySQL compares a string with an integer column:
/// leading whitespace is skipped and the longest numeric prefix counts, so
/// `1abc` and `1.0` address row 1 and `abc` addresses row 0. A prefix that
/// is not a whole number cannot equal any id.
fn coerce_product_id(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits(sign);
    let mut end = int_end;

    if bytes.get(end) == Some(&b'.') {
        end = digits(end + 1);
    }
    let has_digits = end > sign + usize::from(end > int_end);
    if !has_digits {
        return Some(0);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits(end + 1 + exp_sign);
        if exp_end > end + 1 + exp_sign {
            end = exp_end;
        }
    }

    let prefix = &text[..end];
    if end == int_end {
        return prefix.parse::<i64>().ok();
    }

    let value = prefix.parse::<f64>().ok()?;
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then(|| value as i64)
}

fn parse_product_id(raw: &str, not_found: &str) -> Result<i64, HttpError> {
    coerce_product_id(raw).ok_or_else(|| HttpError::NotFound(not_found.to_string()))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "Visible products", body = Vec<ProductResponse>),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id, PRODUCT_NOT_FOUND)?;

    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/search/{keyword}",
    tag = "Product",
    params(("keyword" = String, Path, description = "Substring matched against the product name")),
    responses(
        (status = 200, description = "Matching visible products", body = Vec<ProductResponse>),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn search_products(
    Extension(service): Extension<DynProductQueryService>,
    Path(keyword): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search(&keyword).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    JsonBody(body): JsonBody<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 404, description = "Product not found or deleted", body = ErrorResponse),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id, PRODUCT_NOT_FOUND_OR_DELETED)?;

    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product soft deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn trash_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id, PRODUCT_NOT_FOUND)?;

    let response = service.trash_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/products/{id}/restore",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product restored", body = MessageResponse),
        (status = 404, description = "Product not found or not deleted", body = ErrorResponse),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn restore_product_handler(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_product_id(&id, PRODUCT_NOT_FOUND_OR_NOT_DELETED)?;

    let response = service.restore_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/search/{keyword}", get(search_products))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .delete(trash_product_handler),
        )
        .route("/products/{id}/restore", patch(restore_product_handler))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
