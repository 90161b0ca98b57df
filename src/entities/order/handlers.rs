//! Order HTTP handlers

use super::{model::Order, service::OrderService};
use crate::core::{DataPayload, Envelope, GrubResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub service: Arc<OrderService>,
}

pub async fn list_orders(State(state): State<OrderAppState>) -> GrubResult<Json<Envelope<Vec<Order>>>> {
    Ok(Json(Envelope::new(state.service.list().await?)))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> GrubResult<Json<Envelope<Order>>> {
    Ok(Json(Envelope::new(state.service.read(&order_id).await?)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    DataPayload(payload): DataPayload,
) -> GrubResult<(StatusCode, Json<Envelope<Order>>)> {
    let order = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    DataPayload(payload): DataPayload,
) -> GrubResult<Json<Envelope<Order>>> {
    Ok(Json(Envelope::new(
        state.service.update(&order_id, payload).await?,
    )))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> GrubResult<StatusCode> {
    state.service.destroy(&order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
