//! Callback endpoint integration tests
//!
//! Drives the webhook filter end to end: authentication by source IP,
//! outcome application, duplicate handling and malformed payloads.

use std::sync::Arc;

use emis_iframe_gateway::application::services::CallbackService;
use emis_iframe_gateway::config::AppConfig;
use emis_iframe_gateway::domain::order::{Order, OrderStatus};
use emis_iframe_gateway::domain::ports::OrderStore;
use emis_iframe_gateway::infrastructure::adapters::{InMemoryOrderStore, RecordingNotifier};
use emis_iframe_gateway::infrastructure::http::routes::CallbackRoutes;

const EMIS_IP: &str = "203.0.113.9";
const CALLBACK_PATH: &str = "/wc-api/emis-iframe";

fn config_with_allowed_ip(ip: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.gateway.callback_remote_ip = ip.to_string();
    config
}

async fn setup(
    config: AppConfig,
) -> (
    impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone,
    Arc<InMemoryOrderStore>,
    Arc<RecordingNotifier>,
) {
    let orders = Arc::new(InMemoryOrderStore::default());
    let mut order = Order::new("1042");
    order.status = OrderStatus::OnHold;
    orders.insert(order).await;

    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(CallbackService::new(
        Arc::new(config.clone()),
        orders.clone(),
        notifier.clone(),
    ));

    let routes = CallbackRoutes::create_routes(config, service);
    (routes, orders, notifier)
}

fn accepted_body(order_id: &str) -> String {
    format!(
        r#"{{"merchantReferenceNumber":"{}","status":"ACCEPTED","operation":"PAYMENT"}}"#,
        order_id
    )
}

#[tokio::test]
async fn accepted_callback_from_allowed_ip_resolves_to_processing() {
    let (routes, orders, _) = setup(config_with_allowed_ip(EMIS_IP)).await;

    let resp = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(accepted_body("1042"))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["outcome"], "applied");
    assert_eq!(body["order_status"], "processing");

    let order = orders.get("1042").await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
}

#[tokio::test]
async fn declined_callback_resolves_to_failed() {
    let (routes, orders, _) = setup(config_with_allowed_ip(EMIS_IP)).await;

    let resp = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(r#"{"merchantReferenceNumber":"1042","status":"DECLINED"}"#)
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), 200);
    let order = orders.get("1042").await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Failed);
}

#[tokio::test]
async fn callback_from_wrong_ip_is_rejected_and_alerts() {
    let (routes, orders, notifier) = setup(config_with_allowed_ip("198.51.100.1")).await;

    let resp = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(accepted_body("1042"))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), 403);

    let order = orders.get("1042").await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::OnHold);

    let alerts = notifier.sent().await;
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].body.contains(EMIS_IP));
    assert!(alerts[0].body.contains("198.51.100.1"));
}

#[tokio::test]
async fn unset_allow_list_rejects_all_sources() {
    let (routes, orders, _) = setup(AppConfig::default()).await;

    for source in [EMIS_IP, "0.0.0.0", "127.0.0.1"] {
        let resp = warp::test::request()
            .method("POST")
            .path(CALLBACK_PATH)
            .header("x-forwarded-for", source)
            .body(accepted_body("1042"))
            .reply(&routes)
            .await;

        assert_eq!(resp.status(), 403, "source {}", source);
    }

    let order = orders.get("1042").await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::OnHold);
}

#[tokio::test]
async fn duplicate_callback_is_acknowledged_but_ignored() {
    let (routes, orders, _) = setup(config_with_allowed_ip(EMIS_IP)).await;

    let first = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(accepted_body("1042"))
        .reply(&routes)
        .await;
    assert_eq!(first.status(), 200);

    // Same notification again, then a conflicting one; neither may re-drive
    // the transition.
    let second = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(accepted_body("1042"))
        .reply(&routes)
        .await;
    assert_eq!(second.status(), 200);
    let body: serde_json::Value = serde_json::from_slice(second.body()).unwrap();
    assert_eq!(body["outcome"], "ignored");

    let third = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(r#"{"merchantReferenceNumber":"1042","status":"DECLINED"}"#)
        .reply(&routes)
        .await;
    assert_eq!(third.status(), 200);

    let order = orders.get("1042").await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let (routes, _, _) = setup(config_with_allowed_ip(EMIS_IP)).await;

    let resp = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body("{not json")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn callback_for_unknown_order_is_not_found() {
    let (routes, _, _) = setup(config_with_allowed_ip(EMIS_IP)).await;

    let resp = warp::test::request()
        .method("POST")
        .path(CALLBACK_PATH)
        .header("x-forwarded-for", EMIS_IP)
        .body(accepted_body("9999"))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), 404);
}
