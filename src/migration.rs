//! Schema bootstrap: idempotent DDL for the three tables, applied through
//! sqlx at startup. Foreign keys from restaurant_pizzas cascade on delete so
//! removing a restaurant removes its association rows at the data layer.

use crate::error::AppError;
use sqlx::SqlitePool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
        pizza_id INTEGER NOT NULL REFERENCES pizzas(id) ON DELETE CASCADE
    )
    "#,
];

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
