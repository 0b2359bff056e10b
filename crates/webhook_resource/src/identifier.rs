//! Parsing of the webhook's primary identifier.
//!
//! The identifier is the hook's own API URL, assigned by GitHub at creation
//! time. It encodes the owner, repository, and the 9-digit hook ID in a
//! fixed path shape, for example:
//! `https://api.github.com/repos/vissree/testbed/hooks/242575190`

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;

/// Pattern the primary identifier must match: an `api.` host, the literal
/// `repos` and `hooks` path segments, and a 9-digit numeric hook ID.
const HOOK_URL_PATTERN: &str =
    r"^https://api\.[0-9a-zA-Z][-.\w]*/repos/([-\w]+)/([-\w]+)/hooks/(\d{9})$";

static HOOK_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HOOK_URL_PATTERN).expect("hook URL pattern is valid"));

/// The coordinates extracted from a webhook URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookIdentifier {
    /// GitHub-assigned numeric hook ID.
    pub id: u64,
    /// Repository name.
    pub repo: String,
    /// Repository owner (user or organization).
    pub owner: String,
}

/// The identifier did not match the required URL shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed WebhookURL. {url} doesn't match {pattern}")]
pub struct ParseIdentifierError {
    /// The rejected value.
    pub url: String,
    /// The pattern it was checked against.
    pub pattern: &'static str,
}

/// Parses a webhook URL into its owner, repository, and hook ID.
///
/// Any deviation from the fixed shape (wrong segment count, wrong literal
/// segments, non-9-digit ID) is a parse failure.
///
/// # Examples
///
/// ```rust
/// use webhook_resource::identifier::parse_webhook_url;
///
/// let id = parse_webhook_url("https://api.github.com/repos/vissree/testbed/hooks/242575190")
///     .unwrap();
/// assert_eq!(id.owner, "vissree");
/// assert_eq!(id.repo, "testbed");
/// assert_eq!(id.id, 242575190);
/// ```
pub fn parse_webhook_url(url: &str) -> Result<HookIdentifier, ParseIdentifierError> {
    let malformed = || ParseIdentifierError {
        url: url.to_string(),
        pattern: HOOK_URL_PATTERN,
    };

    let captures = HOOK_URL.captures(url).ok_or_else(malformed)?;

    // The pattern guarantees exactly three capture groups and a 9-digit ID,
    // so the u64 parse cannot overflow.
    let owner = captures[1].to_string();
    let repo = captures[2].to_string();
    let id = captures[3].parse::<u64>().map_err(|_| malformed())?;

    Ok(HookIdentifier { id, repo, owner })
}
