//! Fallback handlers shared by every resource router

use crate::core::{GrubError, RequestError};
use axum::http::{Method, Uri};

/// 405 for a known path requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> GrubError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// 404 for a path no resource serves
pub async fn path_not_found(uri: Uri) -> GrubError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
