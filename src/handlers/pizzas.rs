//! Pizza handlers. Pizzas are read-only over HTTP.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pizzas = state.store.list_pizzas().await?;
    Ok(Json(pizzas))
}
