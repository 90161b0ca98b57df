//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - the routes of every resource descriptor
//! - health routes
//! - not-found and method-not-allowed fallbacks

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
