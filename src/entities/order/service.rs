//! Order operations

use super::model::Order;
use super::pipeline::{create_pipeline, destroy_pipeline, update_pipeline};
use crate::core::{
    GrubResult, Payload, Pipeline, RecordStore, StageContext, next_id, require_existing,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Runs the order pipelines against a store
///
/// Mutations hold the writer lock from the existence guard through the
/// mutator, so two mutations of the collection never interleave.
pub struct OrderService {
    store: Arc<dyn RecordStore<Order>>,
    writer: Mutex<()>,
    create: Pipeline<Order>,
    update: Pipeline<Order>,
    destroy: Pipeline<Order>,
}

impl OrderService {
    pub fn new(store: Arc<dyn RecordStore<Order>>) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
            create: create_pipeline(),
            update: update_pipeline(),
            destroy: destroy_pipeline(),
        }
    }

    pub async fn list(&self) -> GrubResult<Vec<Order>> {
        Ok(self.store.list().await?)
    }

    pub async fn read(&self, order_id: &str) -> GrubResult<Order> {
        require_existing(self.store.as_ref(), order_id).await
    }

    pub async fn create(&self, payload: Payload) -> GrubResult<Order> {
        let _writer = self.writer.lock().await;

        let ctx = StageContext::new(payload);
        self.create.run(&ctx)?;

        let order = Order::from_payload(next_id(), ctx.payload())?;
        let order = self.store.insert(order).await?;

        tracing::info!(order_id = %order.id, lines = order.dishes.len(), "order created");
        Ok(order)
    }

    pub async fn update(&self, order_id: &str, payload: Payload) -> GrubResult<Order> {
        let _writer = self.writer.lock().await;

        let existing = require_existing(self.store.as_ref(), order_id).await?;
        let ctx = StageContext::for_record(order_id, payload, existing);
        self.update.run(&ctx)?;

        let (payload, existing) = ctx.into_parts();
        let mut order = existing.ok_or_else(|| anyhow::anyhow!("guarded order missing"))?;
        let previous = order.status;
        order.apply(&payload)?;
        let order = self.store.replace(order).await?;

        tracing::info!(
            order_id = %order.id,
            from = ?previous,
            to = ?order.status,
            "order updated"
        );
        Ok(order)
    }

    /// Remove a pending order
    ///
    /// A missing order is reported as not found and never reaches the
    /// status check.
    pub async fn destroy(&self, order_id: &str) -> GrubResult<()> {
        let _writer = self.writer.lock().await;

        let existing = require_existing(self.store.as_ref(), order_id).await?;
        let ctx = StageContext::for_record(order_id, Payload::default(), existing);
        self.destroy.run(&ctx)?;

        self.store.remove(order_id).await?;

        tracing::info!(order_id, "order deleted");
        Ok(())
    }
}
