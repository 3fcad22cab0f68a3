//! Product catalog service: CRUD over HTTP/JSON, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod product;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use product::{seed_products, Product, ProductCreate};
pub use routes::app_routes;
pub use service::ProductService;
pub use state::AppState;
pub use store::{create_tables, drop_tables, init_db, reset_db};
