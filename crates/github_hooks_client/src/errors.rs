//! Error types for GitHub hooks client operations.
//!
//! The variants preserve enough of the underlying failure for callers to
//! classify outcomes: API failures carry the HTTP status code GitHub
//! responded with, while transport failures (no response at all) carry the
//! underlying error text.

use http::StatusCode;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur when talking to the GitHub hooks API.
///
/// API-level failures keep the HTTP status code so that callers can map the
/// outcome onto their own error taxonomy without re-parsing response bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// GitHub answered the request with a non-success status code.
    ///
    /// `message` is the `message` field of GitHub's error body, suitable for
    /// surfacing to an end user.
    #[error("GitHub API request failed with status {status}: {message}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// GitHub's human-readable error message.
        message: String,
    },

    /// The request never produced a GitHub response.
    ///
    /// Covers connection failures, URI construction problems, and responses
    /// that could not be decoded into the expected shape.
    #[error("GitHub API request failed: {0}")]
    Transport(String),

    /// The underlying octocrab client could not be constructed.
    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(String),
}

impl Error {
    /// Converts an octocrab error, preserving the HTTP status code when
    /// GitHub produced a response.
    pub(crate) fn from_octocrab(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Error::Api {
                status: source.status_code,
                message: source.message,
            },
            other => Error::Transport(other.to_string()),
        }
    }

    /// The HTTP status code of the failure, when GitHub produced a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
