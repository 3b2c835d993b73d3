use crate::common;
use assert_json_diff::assert_json_eq;
use marketo_client::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_execute_returns_result_verbatim() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let campaigns_mock = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns.json",
        200,
        common::CAMPAIGNS_JSON,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    let response = client
        .execute(&Command::GetCampaigns {
            page: PageRequest::default(),
        })
        .await
        .unwrap();

    let raw: Value = serde_json::from_str(common::CAMPAIGNS_JSON).unwrap();
    assert_json_eq!(json!(response.result()), raw["result"]);
    assert_eq!(response.request_id(), "f81c#157b104ca98");
    assert!(response.error().is_none());
    campaigns_mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_json_is_malformed_response() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let _campaigns = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns.json",
        200,
        r#"{"requestId": "f81c#157b104ca98", "result": ["#,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    match client.get_campaigns(PageRequest::default()).await {
        Err(AppError::MalformedResponse { status, .. }) => assert_eq!(status, StatusCode::OK),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_body_is_malformed_response() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let _lists = common::mock_business(&mut server, "GET", "/rest/v1/lists.json", 500, "", 1).await;

    let client = common::create_test_client(&server);
    match client.get_lists(PageRequest::default()).await {
        Err(AppError::MalformedResponse { status, .. }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_flag_wins_over_http_status() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let _list = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/lists/42.json",
        500,
        r#"{"requestId":"c9d1#1","success":false,"errors":[{"code":"611","message":"System error"}]}"#,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    let response = client.get_list(42).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.error().map(|e| e.code.as_str()), Some("611"));
}

#[tokio::test]
async fn test_business_failure_is_returned_not_raised() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let _campaign = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns/9999.json",
        200,
        r#"{"requestId":"a1b2#3","success":false,"errors":[{"code":"610","message":"Requested resource not found"}]}"#,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    let response = client.get_campaign(9999).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(
        response.error(),
        Some(&ResponseError {
            code: "610".to_string(),
            message: "Requested resource not found".to_string(),
        })
    );
    assert!(response.result().is_empty());

    match response.into_result() {
        Err(AppError::Api { code, .. }) => assert_eq!(code, "610"),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_arguments_send_nothing() {
    let mut server = common::start_server().await;
    let token_mock = common::mock_token(&mut server, common::TOKEN_JSON, 0).await;

    let client = common::create_test_client(&server);
    let result = client
        .get_campaigns(PageRequest::new().with_batch_size(1000))
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_paging_parameters_are_forwarded() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let campaigns_mock = server
        .mock("GET", "/rest/v1/campaigns.json")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("batchSize".into(), "1".into()),
            mockito::Matcher::UrlEncoded("nextPageToken".into(), "GIYDAOBNGEYS2MBWKQYDAORQGA5DAMBOGAYDAKZQGAYDALBQ".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"requestId":"p#2","result":[],"success":true,"moreResult":false}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let page = PageRequest::new()
        .with_batch_size(1)
        .with_next_page_token("GIYDAOBNGEYS2MBWKQYDAORQGA5DAMBOGAYDAKZQGAYDALBQ");
    let response = client.get_campaigns(page).await.unwrap();
    assert!(response.result().is_empty());
    assert!(!response.has_more());
    campaigns_mock.assert_async().await;
}
