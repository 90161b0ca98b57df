//! Dish validation pipelines

use super::model::Dish;
use crate::core::Pipeline;
use crate::core::validation::validators::{matches_route_id, non_empty, present, price};

/// presence×4 → non-empty×3 → price
pub fn create_pipeline() -> Pipeline<Dish> {
    field_checks(Pipeline::new("create"))
}

/// presence×4 → non-empty×3 → price → id-match
///
/// The existence guard runs before this pipeline.
pub fn update_pipeline() -> Pipeline<Dish> {
    field_checks(Pipeline::new("update")).stage("id-match", matches_route_id::<Dish>())
}

fn field_checks(pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    pipeline
        .stage("name-present", present::<Dish>("name"))
        .stage("description-present", present::<Dish>("description"))
        .stage("price-present", present::<Dish>("price"))
        .stage("image_url-present", present::<Dish>("image_url"))
        .stage("name-non-empty", non_empty::<Dish>("name"))
        .stage("description-non-empty", non_empty::<Dish>("description"))
        .stage("image_url-non-empty", non_empty::<Dish>("image_url"))
        .stage("price-valid", price::<Dish>("price"))
}
