//! Unit tests for the hooks client error types.

use super::*;
use http::StatusCode;

#[test]
fn test_api_error_display_includes_status_and_message() {
    let error = Error::Api {
        status: StatusCode::NOT_FOUND,
        message: "Not Found".to_string(),
    };

    let formatted = error.to_string();
    assert!(formatted.contains("404"));
    assert!(formatted.contains("Not Found"));
}

#[test]
fn test_transport_error_display() {
    let error = Error::Transport("connection refused".to_string());
    assert_eq!(
        error.to_string(),
        "GitHub API request failed: connection refused"
    );
}

#[test]
fn test_client_build_error_display() {
    let error = Error::ClientBuild("invalid base uri".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to build GitHub client: invalid base uri"
    );
}

#[test]
fn test_status_accessor() {
    let api = Error::Api {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: "Validation Failed".to_string(),
    };
    assert_eq!(api.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));

    let transport = Error::Transport("timed out".to_string());
    assert_eq!(transport.status(), None);
}
