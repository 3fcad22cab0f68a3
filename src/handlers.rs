//! HTTP handlers: greeting, reset, and product CRUD.

use crate::error::AppError;
use crate::product::{Product, ProductCreate};
use crate::service::ProductService;
use crate::state::AppState;
use crate::store;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

/// Wire-compatible greeting; existing clients match on the exact string.
pub const GREETING: &str = "Hello from FastAPI Backend!";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct ResetBody {
    pub message: String,
    pub products_added: u64,
}

pub async fn greet() -> Json<MessageBody> {
    Json(MessageBody {
        message: GREETING.to_string(),
    })
}

/// Drops and recreates the schema, then re-seeds. Failures surface as a
/// proper error status. Development only.
pub async fn reset_database(State(state): State<AppState>) -> Result<Json<ResetBody>, AppError> {
    let added = store::reset_db(&state.pool).await?;
    tracing::info!(added, "database reset");
    Ok(Json(ResetBody {
        message: "Database reset successfully".to_string(),
        products_added: added,
    }))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(ProductService::list(&state.pool).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(ProductService::get(&state.pool, id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductCreate>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(ProductService::create(&state.pool, &input).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductCreate>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(ProductService::update(&state.pool, id, &input).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, AppError> {
    ProductService::delete(&state.pool, id).await?;
    Ok(Json(MessageBody {
        message: "Product Deleted Successfully".to_string(),
    }))
}
