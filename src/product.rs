//! Product domain model and the literal seed catalog.

use serde::{Deserialize, Serialize};

/// Full persistent entity. `id` is assigned by the store and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// Input shape for create, and the full replacement payload for update.
/// Update is a total overwrite of every field; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// Fixed sample catalog inserted on first bootstrap and on every reset.
pub fn seed_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "phone".to_string(),
            description: Some("budget phone".to_string()),
            price: 99.0,
            quantity: 10,
        },
        ProductCreate {
            name: "laptop".to_string(),
            description: Some("gaming laptop".to_string()),
            price: 1299.0,
            quantity: 5,
        },
        ProductCreate {
            name: "Pen".to_string(),
            description: Some("A blue ink pen".to_string()),
            price: 1.99,
            quantity: 100,
        },
        ProductCreate {
            name: "Table".to_string(),
            description: Some("A wooden table".to_string()),
            price: 199.99,
            quantity: 20,
        },
    ]
}
