//! Restaurant handlers: list, read with menu, delete.

use crate::error::AppError;
use crate::models::RestaurantDetail;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let restaurants = state.store.list_restaurants().await?;
    Ok(Json(restaurants))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let restaurant = state
        .store
        .find_restaurant(id)
        .await?
        .ok_or(AppError::RestaurantNotFound)?;
    let restaurant_pizzas = state.store.restaurant_menu(id).await?;
    Ok(Json(RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !state.store.delete_restaurant(id).await? {
        return Err(AppError::RestaurantNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
