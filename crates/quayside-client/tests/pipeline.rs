//! Request pipeline against a stub HTTP backend.

mod common;

use common::{RecordingHost, client_for};
use quayside_client::{ClientBuilder, Error, Normalized, TokenStore};
use quayside_types::{
    ApiRequest, DashboardStats, LoginRequest, Page, PageRequest, SettlementFeeRecord, UserInfo,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ops_user() -> UserInfo {
    UserInfo {
        user_id: Some(1),
        username: "ops".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_equipment": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, RecordingHost::accepting());
    client.tokens().set_token("tok-1").unwrap();

    let stats: DashboardStats = client.dashboard().stats().await.unwrap();
    assert_eq!(stats.total_equipment, 3);
}

#[tokio::test]
async fn test_no_token_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/content-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, RecordingHost::accepting());
    client.dashboard().content_data().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_raw_body_returned_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"total_equipment": 12, "in_stock": 7, "total_revenue": 1200.5});
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server, RecordingHost::accepting());
    let normalized = client
        .send(ApiRequest::get("/api/dashboard/stats"))
        .await
        .unwrap();
    assert_eq!(normalized, Normalized::Raw(body));
}

#[tokio::test]
async fn test_both_success_codes_unwrap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settlement/fee"))
        .and(query_param("current", "2"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "ok",
            "data": {"list": [{"id": "S1", "settlementCode": "ST000001"}], "total": 6}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/popular/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 20000,
            "msg": "请求成功",
            "data": [{"key": 1, "clickNumber": "203", "title": "电动叉车 CPCD-3T", "increases": 15}]
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());

    let fees: Page<SettlementFeeRecord> = client
        .settlement()
        .fee_list(&PageRequest::new(2, 5))
        .await
        .unwrap();
    assert_eq!(fees.total, 6);
    assert_eq!(fees.list[0].settlement_code, "ST000001");

    let popular = client
        .dashboard()
        .popular_list(quayside_client::PopularKind::Forklift)
        .await
        .unwrap();
    assert_eq!(popular[0].click_number, "203");
    assert!(host.notifications().is_empty());
}

#[tokio::test]
async fn test_application_failure_notifies_and_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rental/application"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 40001,
            "message": "设备库存不足",
            "data": null
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());

    let err = client
        .rental()
        .create_application(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Application { code: 40001, .. }));
    assert_eq!(err.message(), "设备库存不足");
    assert_eq!(host.notifications(), vec!["设备库存不足".to_string()]);
    assert_eq!(host.prompts(), 0);
}

#[tokio::test]
async fn test_failure_without_message_uses_generic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/settlement/fee/S1/pay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 500})))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());
    let err = client.settlement().pay_fee("S1").await.unwrap_err();
    assert_eq!(err.message(), "Error");
}

#[tokio::test]
async fn test_session_invalidating_code_logs_out_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rental/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 50014,
            "msg": "Token expired"
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());
    client.tokens().establish(&ops_user(), Some("tok"), true).unwrap();

    let err = client.rental().analysis().await.unwrap_err();
    assert!(err.is_session_invalidating());
    assert_eq!(host.notifications(), vec!["Token expired".to_string()]);
    assert_eq!(host.prompts(), 1);
    assert_eq!(host.reloads(), 1);
    assert_eq!(client.session().invalidations(), 1);
    assert!(!client.tokens().is_logged_in());
    assert!(client.tokens().user_info().is_none());
}

#[tokio::test]
async fn test_each_failing_response_invalidates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rental/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 50012})))
        .mount(&server)
        .await;

    let host = RecordingHost::dismissing();
    let client = client_for(&server, host.clone());
    client.tokens().set_token("tok").unwrap();

    for _ in 0..3 {
        assert!(client.rental().analysis().await.is_err());
    }
    assert_eq!(client.session().invalidations(), 3);
    assert_eq!(host.prompts(), 3);
    assert_eq!(host.reloads(), 0);
    assert!(client.tokens().is_logged_in());
}

#[tokio::test]
async fn test_user_info_never_invalidates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 50008,
            "message": "Illegal token"
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());
    client.tokens().set_token("tok").unwrap();

    let err = client.user().info(1).await.unwrap_err();
    assert!(matches!(err, Error::Application { code: 50008, .. }));
    assert_eq!(host.notifications(), vec!["Illegal token".to_string()]);
    assert_eq!(host.prompts(), 0);
    assert_eq!(client.session().invalidations(), 0);
    assert!(client.tokens().is_logged_in());
}

#[tokio::test]
async fn test_transport_failure_detail_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "equipment_name"], "msg": "field required"}]
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());
    let err = client
        .equipment()
        .create(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport { status: 422, .. }));
    assert_eq!(err.message(), "field required");
    assert_eq!(host.notifications(), vec!["field required".to_string()]);
}

#[tokio::test]
async fn test_auth_endpoint_failures_are_silent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "用户名或密码错误"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "message": "用户名已存在"
        })))
        .mount(&server)
        .await;

    let host = RecordingHost::accepting();
    let client = client_for(&server, host.clone());

    let login = LoginRequest {
        username: "ops".to_string(),
        password: "wrong".to_string(),
    };
    let err = client.auth().login(&login).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 401, .. }));
    assert_eq!(err.message(), "用户名或密码错误");

    let register = quayside_types::RegisterRequest {
        username: "ops".to_string(),
        password: "pw".to_string(),
        ..Default::default()
    };
    let response = client.auth().register(&register).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["code"], 400);

    assert!(host.notifications().is_empty());
}

#[tokio::test]
async fn test_sign_in_establishes_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "登录成功",
            "data": {
                "user_id": 7,
                "username": "ops",
                "real_name": "王工",
                "role": "admin",
                "token": "issued-token"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .and(header("authorization", "Bearer issued-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, RecordingHost::accepting());
    let login = LoginRequest {
        username: "ops".to_string(),
        password: "secret".to_string(),
    };
    let user = client.auth().sign_in(&login, false).await.unwrap();
    assert_eq!(user.display_name(), "王工");
    assert_eq!(client.tokens().token_tier(), Some(quayside_client::Tier::Transient));
    assert_eq!(client.session().identity().unwrap().user_id, Some(7));

    client.dashboard().stats().await.unwrap();

    client.auth().logout().unwrap();
    assert!(!client.tokens().is_logged_in());
    assert!(client.session().identity().is_none());
}

#[tokio::test]
async fn test_unreachable_backend() {
    let host = RecordingHost::accepting();
    let client = ClientBuilder::new()
        .base_url("http://127.0.0.1:1")
        .token_store(TokenStore::in_memory())
        .ui_host(host.clone())
        .build()
        .unwrap();

    let err = client.dashboard().stats().await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 0, .. }));
    assert!(!err.message().is_empty());
    assert_eq!(host.notifications().len(), 1);
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment/E1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server, RecordingHost::accepting());
    let err = client.equipment().get("E1").await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.message(), "Request Error");
}
