//! Pizzeria API: restaurant/pizza CRUD backend library.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use migration::apply_migrations;
pub use models::{MenuItem, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
pub use routes::app_router;
pub use state::AppState;
pub use store::{SqliteStore, Store};
