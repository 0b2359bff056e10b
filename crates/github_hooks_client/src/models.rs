//! Wire types for the GitHub repository webhooks REST resource.
//!
//! These structs mirror the request and response shapes of the
//! `/repos/{owner}/{repo}/hooks` endpoints. Field names follow the API's
//! snake_case convention.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The `config` sub-object of a webhook.
///
/// All fields are optional: GitHub omits keys it has no value for (the
/// delivery secret in particular is never echoed back), and a request only
/// sends the keys it wants to set. Decoding keeps absent keys absent instead
/// of inventing defaults, so callers can distinguish "not returned" from an
/// explicit value.
///
/// # Examples
///
/// ```rust
/// use github_hooks_client::HookConfig;
///
/// let config: HookConfig = serde_json::from_str(
///     r#"{"url": "https://example.com/hook", "content_type": "json", "insecure_ssl": "0"}"#,
/// ).unwrap();
///
/// assert_eq!(config.url.as_deref(), Some("https://example.com/hook"));
/// assert_eq!(config.insecure_ssl.as_deref(), Some("0"));
/// assert!(config.secret.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    /// Delivery URL the webhook posts payloads to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Payload encoding, `json` or `form`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Delivery signing secret. Never returned by GitHub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// TLS verification flag in GitHub's string encoding: `"0"` verifies
    /// certificates, `"1"` skips verification. GitHub has historically
    /// returned this as either a string or a bare number, so decoding
    /// accepts both and normalizes to the string form.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_insecure_ssl"
    )]
    pub insecure_ssl: Option<String>,
}

/// Accepts `"0"`/`"1"` as well as bare `0`/`1` for `insecure_ssl`.
fn deserialize_insecure_ssl<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    }))
}

/// A repository webhook as returned by GitHub.
///
/// # Examples
///
/// ```rust
/// use github_hooks_client::Hook;
///
/// let hook: Hook = serde_json::from_str(r#"{
///     "id": 242575190,
///     "url": "https://api.github.com/repos/octocat/hello/hooks/242575190",
///     "active": true,
///     "events": ["push"],
///     "config": {"url": "https://example.com/hook", "content_type": "json"}
/// }"#).unwrap();
///
/// assert_eq!(hook.id, 242575190);
/// assert_eq!(hook.events, vec!["push".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    /// GitHub-assigned hook ID.
    pub id: u64,

    /// The API URL of the hook itself. This is what the resource provider
    /// records as the primary identifier.
    pub url: String,

    /// Whether the hook delivers events.
    pub active: Option<bool>,

    /// Event names the hook is subscribed to, in subscription order.
    #[serde(default)]
    pub events: Vec<String>,

    /// Delivery configuration.
    #[serde(default)]
    pub config: HookConfig,
}

/// Request payload for creating or editing a repository webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookRequest {
    /// Delivery configuration to apply.
    pub config: HookConfig,

    /// Event names to subscribe to. Omitted when empty so GitHub keeps its
    /// own default (`push`) on create and the current set on edit.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,

    /// Whether the hook should deliver events. Omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
