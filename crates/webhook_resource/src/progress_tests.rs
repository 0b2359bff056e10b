//! Tests for progress event construction and serialization.

use super::*;
use serde_json::json;

#[test]
fn test_success_event_carries_model() {
    let model = Model {
        webhook_url: Some("https://api.github.com/repos/o/r/hooks/123456789".to_string()),
        ..Default::default()
    };

    let event = ProgressEvent::success("Create complete", Some(model.clone()));

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(event.error_code, None);
    assert_eq!(event.message, "Create complete");
    assert_eq!(event.resource_model, Some(model));
}

#[test]
fn test_failed_event_has_code_and_no_model() {
    let event = ProgressEvent::failed(HandlerErrorCode::NotFound, "Not Found");

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    assert_eq!(event.message, "Not Found");
    assert!(event.resource_model.is_none());
}

#[test]
fn test_operation_status_serialization() {
    assert_eq!(
        serde_json::to_string(&OperationStatus::Success).unwrap(),
        r#""SUCCESS""#
    );
    assert_eq!(
        serde_json::to_string(&OperationStatus::Failed).unwrap(),
        r#""FAILED""#
    );
    assert_eq!(
        serde_json::to_string(&OperationStatus::InProgress).unwrap(),
        r#""IN_PROGRESS""#
    );
}

#[test]
fn test_handler_error_code_serialization() {
    assert_eq!(
        serde_json::to_string(&HandlerErrorCode::ServiceLimitExceeded).unwrap(),
        r#""ServiceLimitExceeded""#
    );
    assert_eq!(
        serde_json::to_string(&HandlerErrorCode::NotUpdatable).unwrap(),
        r#""NotUpdatable""#
    );
}

#[test]
fn test_handler_error_code_as_str_matches_serde_names() {
    for code in [
        HandlerErrorCode::InvalidRequest,
        HandlerErrorCode::AlreadyExists,
        HandlerErrorCode::NotFound,
        HandlerErrorCode::NotUpdatable,
        HandlerErrorCode::AccessDenied,
        HandlerErrorCode::ServiceLimitExceeded,
        HandlerErrorCode::ServiceInternalError,
    ] {
        let serialized = serde_json::to_string(&code).unwrap();
        assert_eq!(serialized, format!("\"{}\"", code.as_str()));
    }
}

#[test]
fn test_event_serialization_skips_absent_fields() {
    let event = ProgressEvent::failed(HandlerErrorCode::AccessDenied, "Bad credentials");
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(
        value,
        json!({
            "OperationStatus": "FAILED",
            "HandlerErrorCode": "AccessDenied",
            "Message": "Bad credentials"
        })
    );

    let event = ProgressEvent::success("Delete complete", None);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({"OperationStatus": "SUCCESS", "Message": "Delete complete"})
    );
}
