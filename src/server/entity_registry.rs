//! Entity registry collecting the routes of every resource

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for a resource
///
/// Each resource (Dish, Order) implements this trait to expose its
/// operations.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "dish")
    fn entity_type(&self) -> &str;

    /// The plural form used as the path prefix (e.g., "dishes")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, state included
    ///
    /// Typically:
    /// - GET/POST /{plural}
    /// - GET/PUT(/DELETE) /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry of every resource served by the application
///
/// Keyed by entity type; registering the same type twice replaces the
/// earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(entity_type = %entity_type, plural = descriptor.plural(), "resource registered");
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered resource into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
