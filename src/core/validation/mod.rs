//! Validation system
//!
//! Field validators are pipeline stages built from small factories; the
//! extractor turns a raw request body into the payload they inspect.

pub mod extractor;
pub mod validators;

pub use extractor::DataPayload;
