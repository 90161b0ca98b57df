//! # GrubDash
//!
//! A validated CRUD API for dishes and orders held in memory.
//!
//! ## Features
//!
//! - **Validation Pipelines**: Every write runs an ordered list of named
//!   stages; the first rejection becomes the response
//! - **Existence Guards**: Record routes resolve the target before any
//!   validation runs, answering 404 for unknown ids
//! - **Lifecycle Rules**: Delivered orders are frozen; only pending orders
//!   can be deleted
//! - **Uniform Errors**: Every failure is rendered as
//!   `{status, code, message}` with a matching HTTP status
//! - **Configuration-Based**: Listener settings and seed data from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let app = GrubDash::new();
//! app.server(true).serve("127.0.0.1:5000").await?;
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Application ===
    pub use crate::app::GrubDash;

    // === Core ===
    pub use crate::core::{
        DataPayload, Envelope, ErrorResponse, GrubError, GrubResult, Payload, Pipeline,
        PipelineError, Record, RecordStore, RequestError, ResourceKind, StageContext,
        StageResult,
    };

    // === Resources ===
    pub use crate::entities::dish::{DishDescriptor, DishService};
    pub use crate::entities::order::{OrderDescriptor, OrderService};
    pub use crate::entities::{Dish, Order, OrderLine, OrderStatus};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError, SeedData, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
