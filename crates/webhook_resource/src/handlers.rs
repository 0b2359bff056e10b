//! The five lifecycle operation handlers.
//!
//! Each handler validates the declarative model, performs at most one call
//! against the injected [`HooksApi`] client, and returns a single
//! [`ProgressEvent`]. Nothing is retried and no state survives the call.
//! Validation failures short-circuit before any network traffic.

use github_hooks_client::{Error as ApiError, HooksApi};
use http::StatusCode;
use tracing::{info, instrument, warn};

use crate::identifier::{parse_webhook_url, HookIdentifier};
use crate::model::Model;
use crate::progress::{HandlerErrorCode, ProgressEvent};
use crate::status_map;

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// Extracts the bearer token, or the `InvalidRequest` event every operation
/// produces when it is missing.
pub(crate) fn require_token(model: &Model) -> Result<&str, ProgressEvent> {
    model.token.as_deref().ok_or_else(|| {
        ProgressEvent::failed(
            HandlerErrorCode::InvalidRequest,
            "Missing required parameter Token",
        )
    })
}

/// Extracts and parses the primary identifier. Both a missing and a
/// malformed `WebhookURL` map to `NotFound`, matching the error code the
/// orchestrator expects for an unaddressable resource.
fn require_identifier(model: &Model) -> Result<HookIdentifier, ProgressEvent> {
    let url = model.webhook_url.as_deref().ok_or_else(|| {
        ProgressEvent::failed(
            HandlerErrorCode::NotFound,
            "Missing primary identifier: WebhookURL",
        )
    })?;

    parse_webhook_url(url)
        .map_err(|e| ProgressEvent::failed(HandlerErrorCode::NotFound, e.to_string()))
}

/// Maps a client error onto a failed event using the operation's dispatch
/// table. Failures without an HTTP status (transport problems) become
/// `ServiceInternalError`.
fn remote_failure(
    table: &[(StatusCode, HandlerErrorCode)],
    error: ApiError,
) -> ProgressEvent {
    match error {
        ApiError::Api { status, message } => {
            let code = status_map::classify(table, status);
            warn!(status = %status, code = %code, "GitHub rejected the request");
            ProgressEvent::failed(code, message)
        }
        other => ProgressEvent::failed(HandlerErrorCode::ServiceInternalError, other.to_string()),
    }
}

/// Handles the Create operation.
///
/// Requires `Token`, `Owner`, and `Repo`, rejects a caller-supplied
/// `WebhookURL` (the field is read-only and assigned by GitHub), builds the
/// request payload, and issues one create call. On 201 the returned hook is
/// folded back into the model, including the newly assigned `WebhookURL`.
#[instrument(skip_all)]
pub async fn create(
    client: &dyn HooksApi,
    _previous: Option<&Model>,
    current: &Model,
) -> ProgressEvent {
    if let Err(event) = require_token(current) {
        return event;
    }

    let Some(owner) = current.owner.as_deref() else {
        return ProgressEvent::failed(
            HandlerErrorCode::InvalidRequest,
            "Missing create only parameter: Owner",
        );
    };

    let Some(repo) = current.repo.as_deref() else {
        return ProgressEvent::failed(
            HandlerErrorCode::InvalidRequest,
            "Missing create only parameter: Repo",
        );
    };

    if current.webhook_url.is_some() {
        return ProgressEvent::failed(
            HandlerErrorCode::InvalidRequest,
            "Read only property WebhookURL part of the request",
        );
    }

    let request = match current.hook_request() {
        Ok(request) => request,
        Err(e) => return ProgressEvent::failed(HandlerErrorCode::InvalidRequest, e.to_string()),
    };

    match client.create_hook(owner, repo, &request).await {
        Ok(hook) => {
            info!(owner = owner, repo = repo, hook_id = hook.id, "Create complete");
            let mut model = current.clone();
            model.apply_hook(&hook);
            ProgressEvent::success("Create complete", Some(model))
        }
        Err(ApiError::Api { status, message }) => {
            let code = status_map::classify_create(status, &message);
            warn!(status = %status, code = %code, "GitHub rejected the request");
            ProgressEvent::failed(code, message)
        }
        Err(other) => {
            ProgressEvent::failed(HandlerErrorCode::ServiceInternalError, other.to_string())
        }
    }
}

/// Handles the Read operation.
///
/// Requires `Token` and a parsable `WebhookURL`, then issues one get call
/// and folds the returned hook back into the model.
#[instrument(skip_all)]
pub async fn read(
    client: &dyn HooksApi,
    _previous: Option<&Model>,
    current: &Model,
) -> ProgressEvent {
    if let Err(event) = require_token(current) {
        return event;
    }

    let identifier = match require_identifier(current) {
        Ok(identifier) => identifier,
        Err(event) => return event,
    };

    match client
        .get_hook(&identifier.owner, &identifier.repo, identifier.id)
        .await
    {
        Ok(hook) => {
            info!(hook_id = hook.id, "Read complete");
            let mut model = current.clone();
            model.apply_hook(&hook);
            ProgressEvent::success("Read complete", Some(model))
        }
        Err(e) => remote_failure(status_map::READ, e),
    }
}

/// Handles the Update operation.
///
/// `Owner`, `Repo`, and `WebhookURL` are create-only: any difference
/// between the previous and desired model fails with `NotUpdatable` before
/// the network is touched. Otherwise the payload is rebuilt and one edit
/// call is issued.
///
/// A 422 here always maps to `InvalidRequest`; unlike Create there is no
/// duplicate-hook case on edit.
#[instrument(skip_all)]
pub async fn update(client: &dyn HooksApi, previous: &Model, current: &Model) -> ProgressEvent {
    if previous.owner != current.owner
        || previous.repo != current.repo
        || previous.webhook_url != current.webhook_url
    {
        return ProgressEvent::failed(
            HandlerErrorCode::NotUpdatable,
            "Cannot update create only parameter",
        );
    }

    if let Err(event) = require_token(current) {
        return event;
    }

    let request = match current.hook_request() {
        Ok(request) => request,
        Err(e) => return ProgressEvent::failed(HandlerErrorCode::InvalidRequest, e.to_string()),
    };

    let identifier = match require_identifier(current) {
        Ok(identifier) => identifier,
        Err(event) => return event,
    };

    match client
        .edit_hook(&identifier.owner, &identifier.repo, identifier.id, &request)
        .await
    {
        Ok(hook) => {
            info!(hook_id = hook.id, "Update complete");
            let mut model = current.clone();
            model.apply_hook(&hook);
            ProgressEvent::success("Update complete", Some(model))
        }
        Err(e) => remote_failure(status_map::UPDATE, e),
    }
}

/// Handles the Delete operation.
///
/// Requires `Token` and a parsable `WebhookURL`. A successful delete (204)
/// returns a success event with no resource model.
#[instrument(skip_all)]
pub async fn delete(
    client: &dyn HooksApi,
    _previous: Option<&Model>,
    current: &Model,
) -> ProgressEvent {
    if let Err(event) = require_token(current) {
        return event;
    }

    let identifier = match require_identifier(current) {
        Ok(identifier) => identifier,
        Err(event) => return event,
    };

    match client
        .delete_hook(&identifier.owner, &identifier.repo, identifier.id)
        .await
    {
        Ok(()) => {
            info!(hook_id = identifier.id, "Delete complete");
            ProgressEvent::success("Delete complete", None)
        }
        Err(e) => remote_failure(status_map::DELETE, e),
    }
}

/// Handles the List operation.
///
/// Not implemented. Exists only to satisfy the orchestrator's expected
/// operation set; always returns a failed event without touching the API.
pub async fn list(_previous: Option<&Model>, _current: &Model) -> ProgressEvent {
    ProgressEvent::failed(HandlerErrorCode::ServiceInternalError, "Not implemented: List")
}
