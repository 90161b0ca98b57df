//! Dish HTTP handlers

use super::{model::Dish, service::DishService};
use crate::core::{DataPayload, Envelope, GrubResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub service: Arc<DishService>,
}

pub async fn list_dishes(State(state): State<DishAppState>) -> GrubResult<Json<Envelope<Vec<Dish>>>> {
    Ok(Json(Envelope::new(state.service.list().await?)))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> GrubResult<Json<Envelope<Dish>>> {
    Ok(Json(Envelope::new(state.service.read(&dish_id).await?)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    DataPayload(payload): DataPayload,
) -> GrubResult<(StatusCode, Json<Envelope<Dish>>)> {
    let dish = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    DataPayload(payload): DataPayload,
) -> GrubResult<Json<Envelope<Dish>>> {
    Ok(Json(Envelope::new(
        state.service.update(&dish_id, payload).await?,
    )))
}
