use chrono::Utc;
use sqlx::PgPool;

use crate::{
    error::{AppError, Result},
    models::{CreateProductRequest, Product, UpdateProductRequest},
};

pub async fn create_product(pool: &PgPool, req: &CreateProductRequest) -> Result<Product> {
    let now = Utc::now();

    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            name, description, price, quantity,
            created_at, updated_at, user_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(req.quantity)
    .bind(now)
    .bind(now)
    .bind(req.user_id)
    .fetch_one(pool)
    .await
    .map_err(AppError::StoreWriteError)?;

    Ok(product)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await
        .map_err(AppError::StoreReadError)?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Product> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::StoreReadError)?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn update_product(pool: &PgPool, req: &UpdateProductRequest) -> Result<Product> {
    if req.id == 0 {
        return Err(AppError::BadRequest("Missing product ID".to_string()));
    }

    sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = $1, description = $2, price = $3, quantity = $4,
            updated_at = $5, user_id = $6
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.price)
    .bind(req.quantity)
    .bind(Utc::now())
    .bind(req.user_id)
    .bind(req.id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::StoreWriteError)?
    .ok_or_else(|| AppError::NotFound("No product found with given ID".to_string()))
}
