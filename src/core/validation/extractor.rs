//! Axum extractor for request payloads
//!
//! This module provides the `DataPayload` extractor that unwraps the `data`
//! envelope of a request body before it reaches the handlers.

use crate::core::error::{GrubError, RequestError};
use crate::core::payload::Payload;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Axum extractor yielding the `data` object of a JSON body
///
/// An empty body is treated as `{}` and does not require a content type, so
/// the validators report the missing fields instead of the extractor
/// rejecting the request.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishAppState>,
///     DataPayload(payload): DataPayload,
/// ) -> GrubResult<(StatusCode, Json<Envelope<Dish>>)> {
///     // payload.get("name") ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DataPayload(pub Payload);

impl<S> FromRequest<S> for DataPayload
where
    S: Send + Sync,
{
    type Rejection = GrubError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            GrubError::Request(RequestError::BodyRejected {
                status: e.status(),
                message: e.body_text(),
            })
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(DataPayload(Payload::default()));
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(DataPayload(Payload::from_body(body)))
    }
}
