//! Entity descriptor for Dish

use super::{
    Dish, create_dish, get_dish, handlers::DishAppState, list_dishes, service::DishService,
    update_dish,
};
use crate::core::Record;
use crate::server::{EntityDescriptor, router::method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub service: Arc<DishService>,
}

impl DishDescriptor {
    pub fn new(service: Arc<DishService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        Dish::KIND.plural()
    }

    fn build_routes(&self) -> Router {
        let state = DishAppState {
            service: self.service.clone(),
        };
        let collection = format!("/{}", self.plural());
        let member = format!("{collection}/{{dish_id}}");

        // Dishes are never deleted: DELETE falls through to 405
        Router::new()
            .route(
                &collection,
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                &member,
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(state)
    }
}
