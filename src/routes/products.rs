use axum::{Json, extract::State};
use http::Method;

use crate::{
    AppState,
    error::Result,
    models::{CreateProductRequest, Product, UpdateProductRequest},
    queries::product_queries,
    utils::extractors::{AppJson, AppQuery, IdQuery, ensure_method},
};

pub async fn create_product(
    State(state): State<AppState>,
    method: Method,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<Json<Product>> {
    ensure_method(&method, Method::POST)?;

    let product = product_queries::create_product(&state.db, &payload).await?;
    tracing::info!(product_id = product.id, user_id = product.user_id, "Product saved");

    Ok(Json(product))
}

pub async fn get_products(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<Vec<Product>>> {
    ensure_method(&method, Method::GET)?;

    let products = product_queries::get_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    method: Method,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Json<Product>> {
    ensure_method(&method, Method::GET)?;
    let id = query.parse("product")?;

    let product = product_queries::find_by_id(&state.db, id).await?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    method: Method,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<Product>> {
    ensure_method(&method, Method::PUT)?;

    let product = product_queries::update_product(&state.db, &payload).await?;
    tracing::info!(product_id = product.id, "Product updated");

    Ok(Json(product))
}
