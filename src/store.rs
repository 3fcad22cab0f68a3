//! `products` table DDL, first-run bootstrap, and the destructive reset.

use crate::error::AppError;
use crate::product::seed_products;
use sqlx::PgPool;

// `name` carries the one uniqueness constraint beyond the primary key; the
// create endpoint surfaces violations of it as a 400.
const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    price DOUBLE PRECISION NOT NULL,
    quantity INTEGER NOT NULL
)
"#;

/// Create the schema if it does not exist yet. Idempotent.
pub async fn create_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    Ok(())
}

pub async fn drop_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("DROP TABLE IF EXISTS products")
        .execute(pool)
        .await?;
    Ok(())
}

/// First-run bootstrap: inserts the seed catalog only when the table is
/// empty, so calling it twice never duplicates rows. Failures are logged and
/// swallowed; the service starts without sample data.
pub async fn init_db(pool: &PgPool) {
    if let Err(e) = seed_if_empty(pool).await {
        tracing::error!(error = %e, "database bootstrap failed");
    }
}

async fn seed_if_empty(pool: &PgPool) -> Result<(), AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!(count, "products already present, skipping seed");
        return Ok(());
    }
    let inserted = insert_seed(pool).await?;
    tracing::info!(inserted, "seeded sample products");
    Ok(())
}

/// Insert the full seed catalog in one transaction. Returns rows added.
async fn insert_seed(pool: &PgPool) -> Result<u64, AppError> {
    let seeds = seed_products();
    let mut tx = pool.begin().await?;
    for p in &seeds {
        sqlx::query(
            "INSERT INTO products (name, description, price, quantity) VALUES ($1, $2, $3, $4)",
        )
        .bind(&p.name)
        .bind(&p.description)
        .bind(p.price)
        .bind(p.quantity)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(seeds.len() as u64)
}

/// Drop and recreate the schema, then re-seed unconditionally. Returns rows
/// added. Development only: the endpoint calling this has no authorization
/// guard and must be disabled or gated externally in production.
pub async fn reset_db(pool: &PgPool) -> Result<u64, AppError> {
    drop_tables(pool).await?;
    create_tables(pool).await?;
    insert_seed(pool).await
}
