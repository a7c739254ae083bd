//! Data model: persisted entities, typed input schemas, and response shapes.
//!
//! Serialization is canonical: the serialized form of each entity is exactly
//! its struct fields, so list endpoints stay flat and lightweight.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Join entity: one pizza offered at one restaurant at one price.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// Denormalized row of restaurant_pizzas joined with pizzas, as embedded in
/// the restaurant detail response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MenuItem {
    pub pizza_id: i64,
    pub price: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuItem>,
}

/// Composite body returned on successful association creation.
#[derive(Debug, Serialize)]
pub struct CreatedRestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Input schema for POST /restaurant_pizzas. `price` stays untyped until
/// [`NewRestaurantPizza::price`] applies the coercion rule.
#[derive(Debug, Deserialize)]
pub struct NewRestaurantPizza {
    #[serde(default)]
    pub price: Value,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

impl NewRestaurantPizza {
    /// Coerce `price` to an integer and check it against the [1, 30] range.
    /// Integral numbers pass through, floats truncate toward zero, numeric
    /// strings parse. Missing, non-numeric, zero, or out-of-range values are
    /// all rejected.
    pub fn price(&self) -> Option<i64> {
        let price = coerce_int(&self.price)?;
        if (1..=30).contains(&price) {
            Some(price)
        } else {
            None
        }
    }
}

fn coerce_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().map(|f| f as i64)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
