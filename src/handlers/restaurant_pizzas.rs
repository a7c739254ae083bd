//! Association creation: offer a pizza at a restaurant at a price.

use crate::error::AppError;
use crate::models::{CreatedRestaurantPizza, NewRestaurantPizza};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewRestaurantPizza>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    // Price is validated before any persistence attempt. Parent existence is
    // not checked here; the foreign keys catch a bad reference at insert.
    let price = body.price().ok_or(AppError::Validation)?;

    let created = state
        .store
        .insert_restaurant_pizza(price, body.restaurant_id, body.pizza_id)
        .await?;
    let pizza = state
        .store
        .find_pizza(created.pizza_id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    let restaurant = state
        .store
        .find_restaurant(created.restaurant_id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedRestaurantPizza {
            id: created.id,
            price: created.price,
            pizza_id: created.pizza_id,
            restaurant_id: created.restaurant_id,
            pizza,
            restaurant,
        }),
    ))
}
