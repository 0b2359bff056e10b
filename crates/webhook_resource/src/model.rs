//! The declarative webhook model and its mapping to the GitHub wire shape.

use std::sync::LazyLock;

use github_hooks_client::{Hook, HookConfig, HookRequest};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

/// Pattern a payload URL must match: HTTPS, a well-formed host, an optional
/// port, and an optional path/query/fragment.
const HTTPS_URL_PATTERN: &str = r"^https://[0-9a-zA-Z]([-.\w]*[0-9a-zA-Z])(:[0-9]*)*([?/#].*)?$";

static HTTPS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HTTPS_URL_PATTERN).expect("https URL pattern is valid"));

/// Declarative description of a repository webhook.
///
/// All fields are optional at the type level; each operation validates the
/// fields it needs. Field names on the wire follow the orchestrator's
/// PascalCase convention.
///
/// `WebhookURL` is the primary identifier: read-only, assigned by GitHub at
/// creation time, and required to address the hook on read, update, and
/// delete. `Owner` and `Repo` are create-only and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// Bearer credential for the GitHub API. Required on every operation
    /// and never logged or echoed back.
    #[serde(rename = "Token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Repository owner (user or organization). Create-only.
    #[serde(rename = "Owner", skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Repository name. Create-only.
    #[serde(rename = "Repo", skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// URL GitHub delivers event payloads to. Required at create time and
    /// must be an HTTPS URL.
    #[serde(rename = "PayloadURL", skip_serializing_if = "Option::is_none")]
    pub payload_url: Option<String>,

    /// Payload encoding, `json` or `form`. Defaults to `json`.
    #[serde(rename = "ContentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Secret used to sign delivery payloads. Never returned by GitHub.
    #[serde(rename = "Secret", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Whether GitHub may skip TLS verification when delivering. Defaults
    /// to false.
    #[serde(rename = "InsecureSSL", skip_serializing_if = "Option::is_none")]
    pub insecure_ssl: Option<bool>,

    /// Event names the webhook subscribes to, in order.
    #[serde(rename = "Events", skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Whether the webhook delivers events.
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Primary identifier: the hook's own API URL, assigned by GitHub.
    /// Must not be supplied by the caller at create time.
    #[serde(rename = "WebhookURL", skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl Model {
    /// Builds the `config` sub-object of the remote request.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] when `PayloadURL` is absent or not an
    /// HTTPS URL, or when `ContentType` is neither `json` nor `form`.
    pub(crate) fn hook_config(&self) -> Result<HookConfig, ValidationError> {
        let payload_url = self
            .payload_url
            .as_deref()
            .ok_or(ValidationError::MissingParameter("PayloadURL"))?;

        if !HTTPS_URL.is_match(payload_url) {
            return Err(ValidationError::MalformedPayloadUrl {
                url: payload_url.to_string(),
                pattern: HTTPS_URL_PATTERN.to_string(),
            });
        }

        let content_type = match self.content_type.as_deref() {
            None => "json",
            Some(value @ ("json" | "form")) => value,
            Some(_) => return Err(ValidationError::InvalidContentType),
        };

        Ok(HookConfig {
            url: Some(payload_url.to_string()),
            content_type: Some(content_type.to_string()),
            secret: self.secret.clone(),
            insecure_ssl: Some(if self.insecure_ssl.unwrap_or(false) {
                "1".to_string()
            } else {
                "0".to_string()
            }),
        })
    }

    /// Builds the full create/edit request payload.
    ///
    /// # Errors
    /// Propagates [`ValidationError`] from config construction.
    pub(crate) fn hook_request(&self) -> Result<HookRequest, ValidationError> {
        let config = self.hook_config()?;

        Ok(HookRequest {
            config,
            events: self.events.clone().unwrap_or_default(),
            active: self.active,
        })
    }

    /// Overwrites the model from a hook returned by GitHub.
    ///
    /// Config fields are only written when the corresponding key is present
    /// in the response; an absent key leaves the prior value untouched.
    /// `Active`, `Events`, and `WebhookURL` always come from the hook's
    /// top-level fields.
    pub(crate) fn apply_hook(&mut self, hook: &Hook) {
        if let Some(url) = &hook.config.url {
            self.payload_url = Some(url.clone());
        }

        if let Some(content_type) = &hook.config.content_type {
            self.content_type = Some(content_type.clone());
        }

        if let Some(secret) = &hook.config.secret {
            self.secret = Some(secret.clone());
        }

        if let Some(insecure_ssl) = &hook.config.insecure_ssl {
            self.insecure_ssl = Some(insecure_ssl != "0");
        }

        self.active = Some(hook.active.unwrap_or(false));
        self.events = if hook.events.is_empty() {
            None
        } else {
            Some(hook.events.clone())
        };
        self.webhook_url = Some(hook.url.clone());
    }
}
