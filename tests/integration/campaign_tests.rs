use crate::common;
use marketo_client::prelude::*;

#[tokio::test]
async fn test_get_campaigns_and_campaign_by_id() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let all = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns.json",
        200,
        common::CAMPAIGNS_JSON,
        1,
    )
    .await;
    let one = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns/1004.json",
        200,
        common::CAMPAIGNS_JSON,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    let campaigns = client.get_campaigns(PageRequest::default()).await.unwrap();
    let first = &campaigns.result()[0];
    assert_eq!(first.id, 1004);

    let campaign = client.get_campaign(first.id).await.unwrap();
    assert_eq!(campaign.result()[0].name, first.name);
    assert_eq!(campaign.result()[0].campaign_type, CampaignType::Trigger);

    all.assert_async().await;
    one.assert_async().await;
}

#[tokio::test]
async fn test_campaign_response_envelope() {
    let mut server = common::start_server().await;
    let _token = common::mock_token(&mut server, common::TOKEN_JSON, 1).await;
    let _campaigns = common::mock_business(
        &mut server,
        "GET",
        "/rest/v1/campaigns.json",
        200,
        common::CAMPAIGNS_JSON,
        1,
    )
    .await;

    let client = common::create_test_client(&server);
    let response = client.get_campaigns(PageRequest::default()).await.unwrap();

    assert!(response.is_success());
    assert!(response.error().is_none());
    assert!(!response.request_id().is_empty());
    assert!(response.next_page_token().is_none());
}
