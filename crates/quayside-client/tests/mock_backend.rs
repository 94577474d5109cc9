//! The in-process mock backend seen through the client.

mod common;

use anyhow::Result;
use common::{RecordingHost, mocked_client_for};
use quayside_client::PopularKind;
use quayside_mock::{DatasetSpec, ResourceFamily};
use quayside_types::{PageRequest, RentalApplicationRecord};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_inbound_listing_served_locally() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = mocked_client_for(&server, host.clone(), &["equipment-inbound"]);

    let page = client
        .equipment()
        .inbound_list(&PageRequest::new(1, 10))
        .await?;
    assert_eq!(page.list.len(), 10);
    assert_eq!(page.total, 50);
    assert!(page.list.iter().all(|r| r.equipment_code.starts_with("EQ")));

    let last = client
        .equipment()
        .inbound_list(&PageRequest::new(5, 10))
        .await?;
    assert_eq!(last.list.len(), 10);

    let past_end = client
        .equipment()
        .inbound_list(&PageRequest::new(6, 10))
        .await?;
    assert!(past_end.list.is_empty());
    assert_eq!(past_end.total, 50);

    assert!(host.notifications().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_repeated_page_is_stable() -> Result<()> {
    let server = MockServer::start().await;
    let client = mocked_client_for(&server, RecordingHost::accepting(), &["rental-application"]);

    let declared = DatasetSpec::for_family(ResourceFamily::RentalApplication)
        .map(|spec| spec.declared_total)
        .unwrap_or_default();

    let page = PageRequest::new(2, 10);
    let first = client.rental().application_list(&page).await?;
    let second = client.rental().application_list(&page).await?;
    assert_eq!(first, second);
    assert_eq!(first.list.len(), 10);
    assert_eq!(first.total, declared);
    assert_eq!(first.total, 60);

    Ok(())
}

#[tokio::test]
async fn test_actions_accept_any_id() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = mocked_client_for(
        &server,
        RecordingHost::accepting(),
        &["rental-application", "settlement-fee"],
    );

    for id in ["1", "not-a-real-id", "APP000042"] {
        client.rental().approve_application(id).await?;
        client.rental().reject_application(id).await?;
    }
    client.settlement().pay_fee("whatever").await?;

    let created = client
        .rental()
        .create_application(&RentalApplicationRecord::default())
        .await?;
    assert_eq!(created, json!({}));

    Ok(())
}

#[tokio::test]
async fn test_disabled_family_uses_network() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settlement/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {"list": [], "total": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mocked_client_for(&server, RecordingHost::accepting(), &["equipment-inbound"]);
    let page = client
        .settlement()
        .fee_list(&PageRequest::new(1, 10))
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}

#[tokio::test]
async fn test_unmatched_request_falls_through() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/latest-activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mocked_client_for(&server, RecordingHost::accepting(), &[]);
    let feed = client.user().latest_activity().await?;
    assert!(feed.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_default_families_answer_dashboard() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = mocked_client_for(&server, RecordingHost::accepting(), &[]);

    let trend = client.dashboard().content_data().await?;
    assert_eq!(trend.len(), 8);

    let forklifts = client
        .dashboard()
        .popular_list(PopularKind::Forklift)
        .await?;
    let cranes = client
        .dashboard()
        .popular_list(PopularKind::Crane)
        .await?;
    assert!(!forklifts.is_empty());
    assert_ne!(forklifts, cranes);

    Ok(())
}
