use assert_json_diff::assert_json_eq;
use marketo_client::error::AppError;
use marketo_client::model::responses::{ApiResponse, ResponseError};
use serde_json::{Value, json};

const CAMPAIGNS_JSON: &str = r#"{"requestId": "f81c#157b104ca98","result": [{ "id": 1004, "name": "Foo", "description": " ", "type": "trigger", "workspaceName": "Default","createdAt": "2012-09-12T19:04:12Z","updatedAt": "2014-10-22T15:51:18Z","active": false}],"success": true}"#;

#[test]
fn successful_reply_keeps_result_verbatim() {
    let response: ApiResponse = serde_json::from_str(CAMPAIGNS_JSON).unwrap();

    assert!(response.is_success());
    assert!(response.error().is_none());
    assert_eq!(response.request_id(), "f81c#157b104ca98");

    let raw: Value = serde_json::from_str(CAMPAIGNS_JSON).unwrap();
    assert_json_eq!(json!(response.result()), raw["result"]);
    assert_eq!(response.result()[0]["id"], json!(1004));
}

#[test]
fn failed_reply_exposes_first_error() {
    let response: ApiResponse = serde_json::from_str(
        r#"{"requestId":"e42b#14272d07d78","success":false,"errors":[{"code":"601","message":"Unauthorized"},{"code":"602","message":"Expired"}]}"#,
    )
    .unwrap();

    assert!(!response.is_success());
    assert!(response.result().is_empty());
    assert_eq!(
        response.error(),
        Some(&ResponseError {
            code: "601".to_string(),
            message: "Unauthorized".to_string(),
        })
    );
    assert_eq!(response.errors.len(), 2);
}

#[test]
fn numeric_error_codes_are_normalised() {
    let response: ApiResponse =
        serde_json::from_str(r#"{"requestId":"1","success":false,"errors":[{"code":610,"message":"Requested resource not found"}]}"#)
            .unwrap();
    assert_eq!(response.error().map(|e| e.code.as_str()), Some("610"));
}

#[test]
fn paging_token_reply_round_trips() {
    let json = r#"{"requestId":"e6be#157b5944116","success":true,"nextPageToken":"OAPD51234567890KBPLTBBZIC7KKF5FR5Y2VQGENTYVAOZ7EF3YQ===="}"#;
    let response: ApiResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.request_id(), "e6be#157b5944116");
    assert_eq!(
        response.next_page_token(),
        Some("OAPD51234567890KBPLTBBZIC7KKF5FR5Y2VQGENTYVAOZ7EF3YQ====")
    );
    assert!(response.result.is_none());
    assert!(!response.has_more());

    let back = serde_json::to_value(&response).unwrap();
    assert_json_eq!(back, serde_json::from_str::<Value>(json).unwrap());
}

#[test]
fn warnings_and_more_result_are_optional() {
    let response: ApiResponse = serde_json::from_str(
        r#"{"requestId":"a","success":true,"result":[],"warnings":["No assets found for the given search criteria."],"moreResult":true,"nextPageToken":"NPT"}"#,
    )
    .unwrap();
    assert_eq!(response.warnings.len(), 1);
    assert!(response.has_more());
    assert_eq!(response.next_page_token(), Some("NPT"));
}

#[test]
fn into_result_maps_business_failure() {
    let ok: ApiResponse = serde_json::from_str(CAMPAIGNS_JSON).unwrap();
    assert_eq!(ok.into_result().unwrap().len(), 1);

    let failed: ApiResponse = serde_json::from_str(
        r#"{"requestId":"x","success":false,"errors":[{"code":"1003","message":"Unknown"}]}"#,
    )
    .unwrap();
    match failed.into_result() {
        Err(AppError::Api { code, message }) => {
            assert_eq!(code, "1003");
            assert_eq!(message, "Unknown");
        }
        other => panic!("Unexpected result: {other:?}"),
    }

    let bare: ApiResponse = serde_json::from_str(r#"{"requestId":"y","success":false}"#).unwrap();
    assert!(matches!(bare.into_result(), Err(AppError::Api { code, .. }) if code == "unknown"));
}

#[test]
fn envelope_without_success_flag_is_rejected() {
    let parsed = serde_json::from_str::<ApiResponse>(r#"{"requestId":"z","result":[]}"#);
    assert!(parsed.is_err());
}
