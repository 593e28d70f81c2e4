use super::*;

#[test]
fn detail_or_prefers_backend_detail() {
    let err = ApiError::Status { status: 404, detail: Some("Event not found".to_owned()) };
    assert_eq!(err.detail_or("Failed to fetch event data"), "Event not found");
}

#[test]
fn detail_or_falls_back_without_detail() {
    assert_eq!(
        ApiError::Status { status: 500, detail: None }.detail_or("Failed to fetch data"),
        "Failed to fetch data"
    );
    assert_eq!(ApiError::Network("offline".to_owned()).detail_or("Failed"), "Failed");
    assert_eq!(
        ApiError::Status { status: 400, detail: Some("  ".to_owned()) }.detail_or("Failed"),
        "Failed"
    );
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status { status: 401, detail: None }.to_string(), "request failed: 401");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn extract_detail_reads_string_detail() {
    assert_eq!(extract_detail(r#"{"detail":"nope"}"#), Some("nope".to_owned()));
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"msg":"field required"},{"msg":"bad date"}]}"#;
    assert_eq!(extract_detail(body), Some("field required; bad date".to_owned()));
}

#[test]
fn extract_detail_ignores_non_json_and_missing_detail() {
    assert_eq!(extract_detail("Internal Server Error"), None);
    assert_eq!(extract_detail(r#"{"message":"x"}"#), None);
    assert_eq!(extract_detail(r#"{"detail":[]}"#), None);
}
