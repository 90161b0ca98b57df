//! Dish operations

use super::model::Dish;
use super::pipeline::{create_pipeline, update_pipeline};
use crate::core::{
    GrubResult, Payload, Pipeline, RecordStore, StageContext, next_id, require_existing,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Runs the dish pipelines against a store
///
/// Mutations hold the writer lock from the existence guard through the
/// mutator, so two mutations of the collection never interleave.
pub struct DishService {
    store: Arc<dyn RecordStore<Dish>>,
    writer: Mutex<()>,
    create: Pipeline<Dish>,
    update: Pipeline<Dish>,
}

impl DishService {
    pub fn new(store: Arc<dyn RecordStore<Dish>>) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
            create: create_pipeline(),
            update: update_pipeline(),
        }
    }

    pub async fn list(&self) -> GrubResult<Vec<Dish>> {
        Ok(self.store.list().await?)
    }

    pub async fn read(&self, dish_id: &str) -> GrubResult<Dish> {
        require_existing(self.store.as_ref(), dish_id).await
    }

    pub async fn create(&self, payload: Payload) -> GrubResult<Dish> {
        let _writer = self.writer.lock().await;

        let ctx = StageContext::new(payload);
        self.create.run(&ctx)?;

        let dish = Dish::from_payload(next_id(), ctx.payload())?;
        let dish = self.store.insert(dish).await?;

        tracing::info!(dish_id = %dish.id, "dish created");
        Ok(dish)
    }

    pub async fn update(&self, dish_id: &str, payload: Payload) -> GrubResult<Dish> {
        let _writer = self.writer.lock().await;

        let existing = require_existing(self.store.as_ref(), dish_id).await?;
        let ctx = StageContext::for_record(dish_id, payload, existing);
        self.update.run(&ctx)?;

        let (payload, existing) = ctx.into_parts();
        let mut dish = existing.ok_or_else(|| anyhow::anyhow!("guarded dish missing"))?;
        dish.apply(&payload)?;
        let dish = self.store.replace(dish).await?;

        tracing::info!(dish_id = %dish.id, "dish updated");
        Ok(dish)
    }
}
