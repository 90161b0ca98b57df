//! Application assembly: stores, services and the HTTP router

use crate::config::AppConfig;
use crate::entities::dish::{DishDescriptor, DishService};
use crate::entities::order::{OrderDescriptor, OrderService};
use crate::entities::{Dish, Order};
use crate::server::ServerBuilder;
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;

/// The dish and order services behind one router
#[derive(Clone)]
pub struct GrubDash {
    pub dishes: Arc<DishService>,
    pub orders: Arc<OrderService>,
}

impl GrubDash {
    /// Application with empty collections
    pub fn new() -> Self {
        Self::with_stores(InMemoryStore::<Dish>::new(), InMemoryStore::<Order>::new())
    }

    /// Application whose collections start with the configured seed records
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let dishes = InMemoryStore::with_records(config.seed.dishes.clone())?;
        let orders = InMemoryStore::with_records(config.seed.orders.clone())?;

        tracing::info!(
            dishes = config.seed.dishes.len(),
            orders = config.seed.orders.len(),
            "seed data loaded"
        );

        Ok(Self::with_stores(dishes, orders))
    }

    fn with_stores(dishes: InMemoryStore<Dish>, orders: InMemoryStore<Order>) -> Self {
        Self {
            dishes: Arc::new(DishService::new(Arc::new(dishes))),
            orders: Arc::new(OrderService::new(Arc::new(orders))),
        }
    }

    /// Server builder with both resources registered
    pub fn server(&self, cors: bool) -> ServerBuilder {
        ServerBuilder::new()
            .register(DishDescriptor::new(self.dishes.clone()))
            .register(OrderDescriptor::new(self.orders.clone()))
            .with_cors(cors)
    }

    /// Complete router, without CORS
    pub fn router(&self) -> Router {
        self.server(false).build()
    }
}

impl Default for GrubDash {
    fn default() -> Self {
        Self::new()
    }
}
