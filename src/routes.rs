//! Router construction. CORS is wide open for development: any origin, any
//! method, any header, credentials off.

use crate::handlers::{
    create_product, delete_product, get_product, greet, list_products, reset_database,
    update_product,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(greet))
        .route("/reset-db", post(reset_database))
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
