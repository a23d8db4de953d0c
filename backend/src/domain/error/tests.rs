//! Tests for domain error construction.

use rstest::rstest;

use super::*;

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID");
    let expected = trace_id.to_string();
    let error = TraceId::scope(trace_id, async move {
        Error::internal("Failed to fetch MES data")
    })
    .await;
    assert_eq!(error.trace_id(), Some(expected.as_str()));
}

#[test]
fn new_leaves_trace_id_empty_out_of_scope() {
    let error = Error::internal("Failed to fetch MES data");
    assert!(error.trace_id().is_none());
}

#[test]
fn display_shows_the_client_message() {
    let error = Error::internal("Failed to fetch ERP data");
    assert_eq!(error.to_string(), "Failed to fetch ERP data");
}

#[test]
fn codes_serialize_in_snake_case() {
    let json = serde_json::to_string(&ErrorCode::InternalError).expect("serialize");
    assert_eq!(json, "\"internal_error\"");
}
