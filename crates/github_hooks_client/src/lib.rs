//! Crate for managing repository webhooks through the GitHub REST API.
//!
//! This crate provides a thin, typed client for the
//! `/repos/{owner}/{repo}/hooks` endpoints, authenticated with a
//! caller-supplied bearer token. The [`HooksApi`] trait is the seam callers
//! program against, so webhook operations can be tested without a network.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Hook, HookConfig, HookRequest};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Operations on the GitHub repository webhooks resource.
///
/// Each method performs exactly one API round trip. Failures are returned
/// immediately; no retries are attempted at this layer.
#[async_trait]
pub trait HooksApi: Send + Sync {
    /// Creates a webhook on a repository.
    async fn create_hook(
        &self,
        owner: &str,
        repo: &str,
        request: &HookRequest,
    ) -> Result<Hook, Error>;

    /// Fetches a single webhook by its GitHub-assigned ID.
    async fn get_hook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Hook, Error>;

    /// Edits an existing webhook.
    async fn edit_hook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        request: &HookRequest,
    ) -> Result<Hook, Error>;

    /// Deletes a webhook.
    async fn delete_hook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), Error>;
}

/// A client for the GitHub repository webhooks API, authenticated with a
/// bearer token.
#[derive(Debug)]
pub struct GitHubHooksClient {
    client: Octocrab,
}

impl GitHubHooksClient {
    /// Creates a new client authenticated with the given personal access or
    /// installation token.
    ///
    /// A fresh client is expected to be built per invocation; it holds no
    /// state beyond the token.
    ///
    /// # Errors
    /// Returns [`Error::ClientBuild`] if the underlying octocrab client
    /// cannot be constructed.
    pub fn new(token: &str) -> Result<Self, Error> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a client pointed at an alternate base URI.
    ///
    /// Used by tests to target a mock server; the production path talks to
    /// `https://api.github.com`.
    ///
    /// # Errors
    /// Returns [`Error::ClientBuild`] if the base URI is invalid or the
    /// client cannot be constructed.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self, Error> {
        let client = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(|e| Error::ClientBuild(e.to_string()))?
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an already-configured octocrab client.
    pub fn from_octocrab(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HooksApi for GitHubHooksClient {
    /// Creates a webhook via `POST /repos/{owner}/{repo}/hooks`.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with the response status for non-success
    /// answers (422 for invalid or duplicate configuration, 403/401 for
    /// authorization failures, 404 for a missing repository).
    #[instrument(skip(self, request), fields(owner = %owner, repo = %repo))]
    async fn create_hook(
        &self,
        owner: &str,
        repo: &str,
        request: &HookRequest,
    ) -> Result<Hook, Error> {
        let path = format!("/repos/{}/{}/hooks", owner, repo);
        let result: OctocrabResult<Hook> = self.client.post(path, Some(request)).await;

        match result {
            Ok(hook) => {
                info!(hook_id = hook.id, "Created webhook");
                Ok(hook)
            }
            Err(e) => {
                error!("Failed to create webhook");
                Err(Error::from_octocrab(e))
            }
        }
    }

    /// Fetches a webhook via `GET /repos/{owner}/{repo}/hooks/{hook_id}`.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with status 404 when the hook does not exist.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, hook_id = %hook_id))]
    async fn get_hook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Hook, Error> {
        let path = format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id);
        let result: OctocrabResult<Hook> = self.client.get(path, None::<&()>).await;

        match result {
            Ok(hook) => Ok(hook),
            Err(e) => {
                error!("Failed to get webhook");
                Err(Error::from_octocrab(e))
            }
        }
    }

    /// Edits a webhook via `PATCH /repos/{owner}/{repo}/hooks/{hook_id}`.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with the response status on failure.
    #[instrument(skip(self, request), fields(owner = %owner, repo = %repo, hook_id = %hook_id))]
    async fn edit_hook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        request: &HookRequest,
    ) -> Result<Hook, Error> {
        let path = format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id);
        let result: OctocrabResult<Hook> = self.client.patch(path, Some(request)).await;

        match result {
            Ok(hook) => {
                info!(hook_id = hook.id, "Updated webhook");
                Ok(hook)
            }
            Err(e) => {
                error!("Failed to update webhook");
                Err(Error::from_octocrab(e))
            }
        }
    }

    /// Deletes a webhook via `DELETE /repos/{owner}/{repo}/hooks/{hook_id}`.
    ///
    /// GitHub answers with 204 and an empty body, so this goes through the
    /// raw request path instead of the JSON-decoding helpers.
    ///
    /// # Errors
    /// Returns [`Error::Api`] with the response status on failure.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, hook_id = %hook_id))]
    async fn delete_hook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/hooks/{}", owner, repo, hook_id);
        let response = self
            .client
            ._delete(path, None::<&()>)
            .await
            .map_err(Error::from_octocrab)?;

        match octocrab::map_github_error(response).await {
            Ok(_) => {
                info!(hook_id = hook_id, "Deleted webhook");
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete webhook");
                Err(Error::from_octocrab(e))
            }
        }
    }
}
