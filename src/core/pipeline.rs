//! Linear validation pipeline
//!
//! An operation is described by an ordered list of named stages. The runner
//! executes them in order and stops at the first failure, so nothing after a
//! rejected stage (the mutator included) ever runs.

use crate::core::entity::{Record, ResourceKind};
use crate::core::error::PipelineError;
use crate::core::payload::Payload;

/// Outcome of a single stage: continue, or reject the request
pub type StageResult = Result<(), PipelineError>;

type Stage<T> = Box<dyn Fn(&StageContext<T>) -> StageResult + Send + Sync>;

/// Request-scoped state handed from stage to stage
///
/// The context owns its data: the payload moves in from the request, and the
/// record found by the existence guard moves in as a copy that the mutator
/// later writes back.
#[derive(Debug, Clone)]
pub struct StageContext<T> {
    route_id: Option<String>,
    payload: Payload,
    existing: Option<T>,
}

impl<T> StageContext<T> {
    /// Context for an operation on the collection itself (create)
    pub fn new(payload: Payload) -> Self {
        Self {
            route_id: None,
            payload,
            existing: None,
        }
    }

    /// Context for an operation on a record found by the existence guard
    pub fn for_record(route_id: impl Into<String>, payload: Payload, existing: T) -> Self {
        Self {
            route_id: Some(route_id.into()),
            payload,
            existing: Some(existing),
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn existing(&self) -> Option<&T> {
        self.existing.as_ref()
    }

    /// Split the context into the payload and the guarded record
    pub fn into_parts(self) -> (Payload, Option<T>) {
        (self.payload, self.existing)
    }
}

/// An ordered list of named stages for one operation
pub struct Pipeline<T> {
    kind: ResourceKind,
    operation: &'static str,
    stages: Vec<(&'static str, Stage<T>)>,
}

impl<T: Record> Pipeline<T> {
    /// Create an empty pipeline for an operation on `T`
    pub fn new(operation: &'static str) -> Self {
        Self {
            kind: T::KIND,
            operation,
            stages: Vec::new(),
        }
    }

    /// Append a stage
    pub fn stage<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&StageContext<T>) -> StageResult + Send + Sync + 'static,
    {
        self.stages.push((name, Box::new(check)));
        self
    }

    /// Run every stage in order, short-circuiting on the first failure
    pub fn run(&self, ctx: &StageContext<T>) -> StageResult {
        for (name, check) in &self.stages {
            if let Err(err) = check(ctx) {
                tracing::debug!(
                    kind = %self.kind,
                    operation = self.operation,
                    stage = name,
                    error = %err,
                    "pipeline rejected request"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }
}
