//! Validation errors raised before any network call is made.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// A problem with the declarative model detected during request construction.
///
/// Every variant maps onto the `InvalidRequest` handler error code; the
/// messages match what the provider surfaces to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field the operation needs was not supplied.
    #[error("Missing required parameter {0}")]
    MissingParameter(&'static str),

    /// The payload URL does not match the required HTTPS shape.
    #[error("Payload URL {url} doesn't match {pattern}")]
    MalformedPayloadUrl {
        /// The rejected value.
        url: String,
        /// The pattern it was checked against.
        pattern: String,
    },

    /// The content type is neither `json` nor `form`.
    #[error("ContentType must be either json or form")]
    InvalidContentType,
}
