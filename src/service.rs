//! Product CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::product::{Product, ProductCreate};
use sqlx::PgPool;

const SELECT_COLUMNS: &str = "id, name, description, price, quantity";

pub struct ProductService;

impl ProductService {
    /// All products in store order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// One product by id, or `NotFound`.
    pub async fn get(pool: &PgPool, id: i64) -> Result<Product, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Insert one product; the store assigns the id. A unique-constraint
    /// violation maps to `Duplicate`.
    pub async fn create(pool: &PgPool, input: &ProductCreate) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (name, description, price, quantity) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            SELECT_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %input.name, "query");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::from_insert)?;
        tx.commit().await?;
        Ok(row)
    }

    /// Total overwrite of every writable column. Read-then-act: the row is
    /// fetched first and absence is a `NotFound`; the fetch/update pair is
    /// not serialized against concurrent writers to the same id.
    pub async fn update(pool: &PgPool, id: i64, input: &ProductCreate) -> Result<Product, AppError> {
        let select_sql = format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS);
        let update_sql = format!(
            "UPDATE products SET name = $1, description = $2, price = $3, quantity = $4 \
             WHERE id = $5 RETURNING {}",
            SELECT_COLUMNS
        );
        tracing::debug!(sql = %update_sql, id, "query");
        let mut tx = pool.begin().await?;
        let existing = sqlx::query_as::<_, Product>(&select_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(AppError::NotFound(id));
        }
        let row = sqlx::query_as::<_, Product>(&update_sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Delete one product by id. Read-then-act like `update`.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let select_sql = format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS);
        tracing::debug!(id, "delete product");
        let mut tx = pool.begin().await?;
        let existing = sqlx::query_as::<_, Product>(&select_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(AppError::NotFound(id));
        }
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
