//! Progress events returned to the orchestrator.
//!
//! Every operation ends in exactly one [`ProgressEvent`]: success with an
//! optional updated model, or failure with a code from the fixed taxonomy
//! and a message suitable for end users.

use serde::{Deserialize, Serialize};

use crate::model::Model;

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

/// Outcome of an operation as seen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    /// The operation completed.
    #[serde(rename = "SUCCESS")]
    Success,
    /// The operation failed terminally.
    #[serde(rename = "FAILED")]
    Failed,
    /// The operation needs to be polled again. Never produced by this
    /// provider (every call completes in one round trip) but part of the
    /// orchestrator contract.
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
}

/// Normalized failure codes surfaced to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    /// The request was rejected before or by the remote API as invalid.
    InvalidRequest,
    /// The webhook already exists on the repository.
    AlreadyExists,
    /// The webhook or repository does not exist.
    NotFound,
    /// A create-only property differed between previous and desired state.
    NotUpdatable,
    /// The credentials were rejected.
    AccessDenied,
    /// The remote API refused the call, typically rate limiting.
    ServiceLimitExceeded,
    /// Any other remote failure.
    ServiceInternalError,
}

impl HandlerErrorCode {
    /// The CloudFormation-style string name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "InvalidRequest",
            Self::AlreadyExists => "AlreadyExists",
            Self::NotFound => "NotFound",
            Self::NotUpdatable => "NotUpdatable",
            Self::AccessDenied => "AccessDenied",
            Self::ServiceLimitExceeded => "ServiceLimitExceeded",
            Self::ServiceInternalError => "ServiceInternalError",
        }
    }
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result structure returned after any operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressEvent {
    /// Whether the operation succeeded, failed, or is still pending.
    #[serde(rename = "OperationStatus")]
    pub status: OperationStatus,

    /// Failure code, present only on failed events.
    #[serde(rename = "HandlerErrorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    /// Human-readable outcome description.
    #[serde(rename = "Message")]
    pub message: String,

    /// The updated resource model, present on successful create/read/update.
    #[serde(rename = "ResourceModel", skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<Model>,
}

impl ProgressEvent {
    /// A successful event, optionally carrying the updated model.
    pub fn success(message: impl Into<String>, resource_model: Option<Model>) -> Self {
        Self {
            status: OperationStatus::Success,
            error_code: None,
            message: message.into(),
            resource_model,
        }
    }

    /// A failed event with the given error code.
    pub fn failed(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Failed,
            error_code: Some(error_code),
            message: message.into(),
            resource_model: None,
        }
    }
}
