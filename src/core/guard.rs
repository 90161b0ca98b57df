//! Existence guard

use crate::core::entity::Record;
use crate::core::error::{GrubResult, PipelineError};
use crate::core::service::RecordStore;

/// Look up the record addressed by a route id
///
/// Returns an owned copy for the downstream stages, or `NotFound` so that the
/// caller skips every remaining stage.
pub async fn require_existing<T: Record>(store: &dyn RecordStore<T>, id: &str) -> GrubResult<T> {
    match store.find(id).await? {
        Some(record) => Ok(record),
        None => Err(PipelineError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
        .into()),
    }
}
