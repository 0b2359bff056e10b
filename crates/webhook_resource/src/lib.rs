//! Resource provider for GitHub repository webhooks.
//!
//! This crate lets an infrastructure-as-code orchestrator manage a single
//! repository webhook declaratively. It translates a desired [`Model`] plus
//! a previous-state snapshot into one GitHub REST API call per operation
//! and reports back a normalized [`ProgressEvent`].
//!
//! The whole provider is a thin adapter: field mapping between the
//! declarative model and the GitHub request shape, parsing of the
//! URL-embedded primary identifier, and a fixed mapping from HTTP status
//! codes onto the orchestrator's error taxonomy. There are no retries, no
//! caching, and no state between invocations; every failure is terminal for
//! the call that produced it.
//!
//! The [`handlers`] module exposes the operations over the injected
//! [`HooksApi`](github_hooks_client::HooksApi) seam for testing; [`handle`]
//! is the production entry point, building a fresh token-authenticated
//! client per invocation.

use github_hooks_client::GitHubHooksClient;
use tracing::instrument;

pub mod errors;
pub mod handlers;
pub mod identifier;
pub mod model;
pub mod progress;
mod status_map;

pub use errors::ValidationError;
pub use model::Model;
pub use progress::{HandlerErrorCode, OperationStatus, ProgressEvent};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The lifecycle operations the orchestrator can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create the webhook.
    Create,
    /// Read the webhook's current remote state.
    Read,
    /// Update the webhook's mutable properties.
    Update,
    /// Delete the webhook.
    Delete,
    /// List webhooks. Not implemented; always fails.
    List,
}

impl Operation {
    /// The operation's name as used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::List => "List",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one lifecycle operation against the real GitHub API.
///
/// Builds a fresh client bound to the model's `Token` (List excepted, which
/// never reaches the network) and dispatches to the matching handler.
/// Always returns a [`ProgressEvent`]; no error escapes as a panic or a
/// bare `Err`.
///
/// # Examples
///
/// ```rust,no_run
/// use webhook_resource::{handle, Model, Operation};
///
/// # async fn example() {
/// let desired = Model {
///     token: Some("ghp_...".to_string()),
///     owner: Some("vissree".to_string()),
///     repo: Some("testbed".to_string()),
///     payload_url: Some("https://example.com/hook".to_string()),
///     ..Default::default()
/// };
///
/// let event = handle(Operation::Create, None, &desired).await;
/// println!("{:?}: {}", event.status, event.message);
/// # }
/// ```
#[instrument(skip(previous, current), fields(operation = %operation))]
pub async fn handle(
    operation: Operation,
    previous: Option<&Model>,
    current: &Model,
) -> ProgressEvent {
    if operation == Operation::List {
        return handlers::list(previous, current).await;
    }

    let token = match handlers::require_token(current) {
        Ok(token) => token,
        Err(event) => return event,
    };

    let client = match GitHubHooksClient::new(token) {
        Ok(client) => client,
        Err(e) => {
            return ProgressEvent::failed(HandlerErrorCode::ServiceInternalError, e.to_string())
        }
    };

    match operation {
        Operation::Create => handlers::create(&client, previous, current).await,
        Operation::Read => handlers::read(&client, previous, current).await,
        Operation::Update => {
            let Some(previous) = previous else {
                return ProgressEvent::failed(
                    HandlerErrorCode::InvalidRequest,
                    "Missing previous resource state",
                );
            };
            handlers::update(&client, previous, current).await
        }
        Operation::Delete => handlers::delete(&client, previous, current).await,
        Operation::List => handlers::list(previous, current).await,
    }
}
