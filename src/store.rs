//! Repository abstraction and its SQLite implementation.
//!
//! Handlers depend on [`Store`] only; [`SqliteStore`] executes the actual
//! queries against a pool. Isolation between concurrent writers is the
//! database's job, not ours.

use crate::error::AppError;
use crate::models::{MenuItem, Pizza, Restaurant, RestaurantPizza};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait Store: Send + Sync {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError>;
    async fn find_restaurant(&self, id: i64) -> Result<Option<Restaurant>, AppError>;
    async fn insert_restaurant(&self, name: &str, address: &str) -> Result<Restaurant, AppError>;
    /// Delete a restaurant by primary key; association rows go with it via
    /// cascade. Returns false when no row matched.
    async fn delete_restaurant(&self, id: i64) -> Result<bool, AppError>;
    /// The restaurant's offerings: restaurant_pizzas joined with pizzas.
    async fn restaurant_menu(&self, restaurant_id: i64) -> Result<Vec<MenuItem>, AppError>;

    async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError>;
    async fn find_pizza(&self, id: i64) -> Result<Option<Pizza>, AppError>;
    async fn insert_pizza(&self, name: &str, ingredients: &str) -> Result<Pizza, AppError>;

    async fn insert_restaurant_pizza(
        &self,
        price: i64,
        restaurant_id: i64,
        pizza_id: i64,
    ) -> Result<RestaurantPizza, AppError>;
    async fn count_restaurant_pizzas(&self) -> Result<i64, AppError>;
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, Restaurant>("SELECT id, name, address FROM restaurants")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_restaurant(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_restaurant(&self, name: &str, address: &str) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(name)
        .bind(address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_restaurant(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete restaurant");
        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn restaurant_menu(&self, restaurant_id: i64) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT rp.pizza_id, rp.price, p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_pizza(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        let row =
            sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn insert_pizza(&self, name: &str, ingredients: &str) -> Result<Pizza, AppError> {
        let row = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(name)
        .bind(ingredients)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_restaurant_pizza(
        &self,
        price: i64,
        restaurant_id: i64,
        pizza_id: i64,
    ) -> Result<RestaurantPizza, AppError> {
        tracing::debug!(price, restaurant_id, pizza_id, "insert restaurant_pizza");
        let row = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
            VALUES (?, ?, ?)
            RETURNING id, price, restaurant_id, pizza_id
            "#,
        )
        .bind(price)
        .bind(restaurant_id)
        .bind(pizza_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn count_restaurant_pizzas(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Open a pool for `database_url`, creating the file if missing and enabling
/// foreign key enforcement on every connection.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(AppError::Db)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}
