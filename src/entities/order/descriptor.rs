//! Entity descriptor for Order

use super::{
    Order, create_order, delete_order, get_order, handlers::OrderAppState, list_orders,
    service::OrderService, update_order,
};
use crate::core::Record;
use crate::server::{EntityDescriptor, router::method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub service: Arc<OrderService>,
}

impl OrderDescriptor {
    pub fn new(service: Arc<OrderService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        Order::KIND.plural()
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            service: self.service.clone(),
        };
        let collection = format!("/{}", self.plural());
        let member = format!("{collection}/{{order_id}}");

        Router::new()
            .route(
                &collection,
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                &member,
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(state)
    }
}
