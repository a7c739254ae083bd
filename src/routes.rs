//! Router assembly: index page, data routes, and common service routes.

use crate::handlers::{pizzas, restaurant_pizzas, restaurants};
use crate::state::AppState;
use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full application router with state applied.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/restaurants", get(restaurants::list))
        .route(
            "/restaurants/:id",
            get(restaurants::read).delete(restaurants::delete),
        )
        .route("/pizzas", get(pizzas::list))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
