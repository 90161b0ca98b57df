//! Order validation pipelines and status guards

use super::model::{Order, OrderStatus};
use crate::core::validation::validators::{matches_route_id, non_empty, order_lines, present};
use crate::core::{Pipeline, PipelineError, StageContext, StageResult};
use serde_json::Value;

/// presence×3 → non-empty(deliverTo) → non-empty(mobileNumber) → dishes
pub fn create_pipeline() -> Pipeline<Order> {
    Pipeline::new("create")
        .stage("deliverTo-present", present::<Order>("deliverTo"))
        .stage("mobileNumber-present", present::<Order>("mobileNumber"))
        .stage("dishes-present", present::<Order>("dishes"))
        .stage("deliverTo-non-empty", non_empty::<Order>("deliverTo"))
        .stage("mobileNumber-non-empty", non_empty::<Order>("mobileNumber"))
        .stage("dishes-valid", order_lines::<Order>("dishes"))
}

/// presence×4 → non-empty×2 → dishes → id-match → status → not delivered
///
/// The existence guard runs before this pipeline.
pub fn update_pipeline() -> Pipeline<Order> {
    Pipeline::new("update")
        .stage("deliverTo-present", present::<Order>("deliverTo"))
        .stage("mobileNumber-present", present::<Order>("mobileNumber"))
        .stage("dishes-present", present::<Order>("dishes"))
        .stage("status-present", present::<Order>("status"))
        .stage("deliverTo-non-empty", non_empty::<Order>("deliverTo"))
        .stage("mobileNumber-non-empty", non_empty::<Order>("mobileNumber"))
        .stage("dishes-valid", order_lines::<Order>("dishes"))
        .stage("id-match", matches_route_id::<Order>())
        .stage("status-valid", status_valid)
        .stage("not-delivered", not_delivered)
}

/// pending-only
///
/// The existence guard runs before this pipeline.
pub fn destroy_pipeline() -> Pipeline<Order> {
    Pipeline::new("destroy").stage("pending-only", pending_only)
}

/// The payload status is one of the canonical statuses
pub fn status_valid(ctx: &StageContext<Order>) -> StageResult {
    ctx.payload()
        .get("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .map(|_| ())
        .ok_or(PipelineError::InvalidStatus)
}

/// Reject any change to an order that has been delivered
pub fn not_delivered(ctx: &StageContext<Order>) -> StageResult {
    match ctx.existing().and_then(|order| order.status) {
        Some(status) if status.is_terminal() => Err(PipelineError::TerminalStateViolation),
        _ => Ok(()),
    }
}

/// Only orders that are pending (or were never given a status) may be removed
pub fn pending_only(ctx: &StageContext<Order>) -> StageResult {
    match ctx.existing() {
        Some(order) if !order.is_deletable() => Err(PipelineError::DeleteNotAllowed),
        _ => Ok(()),
    }
}
