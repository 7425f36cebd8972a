//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{
        BadRequestIdResponse, BadRequestJsonResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::controller::ProductController;
use crate::error::ProductResult;
use crate::models::{Product, ProductDto};
use crate::service::ProductCatalog;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDto),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<S: ProductCatalog + 'static>(controller: ProductController<S>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(controller)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, ordered by id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: ProductCatalog>(
    State(controller): State<ProductController<S>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = controller.list().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: ProductCatalog>(
    State(controller): State<ProductController<S>>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let product = controller.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: ProductCatalog>(
    State(controller): State<ProductController<S>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = controller.detail(id).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<S: ProductCatalog>(
    State(controller): State<ProductController<S>>,
    IdPath(id): IdPath,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ProductResult<Json<Product>> {
    let product = controller.update(id, dto).await?;
    Ok(Json(product))
}

/// Replace a product (PATCH alias of PUT, every field is required)
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_product<S: ProductCatalog>(
    state: State<ProductController<S>>,
    id: IdPath,
    body: JsonBody<ProductDto>,
) -> ProductResult<Json<Product>> {
    update_product(state, id, body).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: ProductCatalog>(
    State(controller): State<ProductController<S>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    controller.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
