//! Status-code dispatch tables.
//!
//! The mapping from an HTTP status to a handler error code is data, not
//! branching logic: each operation owns a constant table consulted by a
//! single lookup. Statuses missing from a table fall through to
//! `ServiceInternalError`. The one content-based special case is Create's
//! duplicate-hook detection inside a 422 response; Update deliberately has
//! no such case and maps 422 straight to `InvalidRequest`.

use http::StatusCode;

use crate::progress::HandlerErrorCode;

#[cfg(test)]
#[path = "status_map_tests.rs"]
mod tests;

/// Fragment of GitHub's 422 message that identifies a duplicate hook.
pub(crate) const DUPLICATE_HOOK_FRAGMENT: &str = "Hook already exists on this repository";

/// Failure statuses for `POST /repos/{owner}/{repo}/hooks`.
pub(crate) const CREATE: &[(StatusCode, HandlerErrorCode)] = &[
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        HandlerErrorCode::InvalidRequest,
    ),
    (
        StatusCode::FORBIDDEN,
        HandlerErrorCode::ServiceLimitExceeded,
    ),
    (StatusCode::UNAUTHORIZED, HandlerErrorCode::AccessDenied),
];

/// Failure statuses for `GET /repos/{owner}/{repo}/hooks/{id}`.
pub(crate) const READ: &[(StatusCode, HandlerErrorCode)] = &[
    (
        StatusCode::FORBIDDEN,
        HandlerErrorCode::ServiceLimitExceeded,
    ),
    (StatusCode::UNAUTHORIZED, HandlerErrorCode::AccessDenied),
    (StatusCode::NOT_FOUND, HandlerErrorCode::NotFound),
];

/// Failure statuses for `PATCH /repos/{owner}/{repo}/hooks/{id}`.
pub(crate) const UPDATE: &[(StatusCode, HandlerErrorCode)] = &[
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        HandlerErrorCode::InvalidRequest,
    ),
    (
        StatusCode::FORBIDDEN,
        HandlerErrorCode::ServiceLimitExceeded,
    ),
    (StatusCode::UNAUTHORIZED, HandlerErrorCode::AccessDenied),
    (StatusCode::NOT_FOUND, HandlerErrorCode::NotFound),
];

/// Failure statuses for `DELETE /repos/{owner}/{repo}/hooks/{id}`.
pub(crate) const DELETE: &[(StatusCode, HandlerErrorCode)] = &[
    (
        StatusCode::FORBIDDEN,
        HandlerErrorCode::ServiceLimitExceeded,
    ),
    (StatusCode::UNAUTHORIZED, HandlerErrorCode::AccessDenied),
    (StatusCode::NOT_FOUND, HandlerErrorCode::NotFound),
];

/// Looks up the error code for a status, falling through to
/// `ServiceInternalError` for anything the table does not list.
pub(crate) fn classify(
    table: &[(StatusCode, HandlerErrorCode)],
    status: StatusCode,
) -> HandlerErrorCode {
    table
        .iter()
        .find(|(candidate, _)| *candidate == status)
        .map(|(_, code)| *code)
        .unwrap_or(HandlerErrorCode::ServiceInternalError)
}

/// Create-specific classification: a 422 whose message names a duplicate
/// hook becomes `AlreadyExists`; everything else uses the table.
pub(crate) fn classify_create(status: StatusCode, message: &str) -> HandlerErrorCode {
    if status == StatusCode::UNPROCESSABLE_ENTITY && message.contains(DUPLICATE_HOOK_FRAGMENT) {
        return HandlerErrorCode::AlreadyExists;
    }

    classify(CREATE, status)
}
