//! Core module containing the record abstraction, the validation pipeline
//! and the error taxonomy

pub mod entity;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod payload;
pub mod pipeline;
pub mod service;
pub mod validation;

pub use entity::{Record, ResourceKind, next_id};
pub use envelope::Envelope;
pub use error::{ErrorResponse, GrubError, GrubResult, PipelineError, RequestError};
pub use guard::require_existing;
pub use payload::Payload;
pub use pipeline::{Pipeline, StageContext, StageResult};
pub use service::RecordStore;
pub use validation::DataPayload;
