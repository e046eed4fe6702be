//! Content workflow tests against a mock server
//!
//! Exercises the 202/task-id protocol, task polling, uniqueness lookups,
//! manifest handling, and read-side reference normalization.

use std::time::Duration;

use capataz_entities::{
    EntityError, PathScope, PollSettings, SatelliteClient, SatelliteConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TASK_ID: &str = "5d8bcfcd-9cb6-4b9d-b2b6-2d9b2584f478";

fn client_for(server: &MockServer) -> SatelliteClient {
    SatelliteClient::new(
        SatelliteConfig::new(&server.uri())
            .with_auth("admin", "changeme")
            .with_task_polling(10, 500),
    )
    .expect("client")
}

fn task_body(state: &str, result: &str) -> serde_json::Value {
    json!({"id": TASK_ID, "state": state, "result": result})
}

#[tokio::test]
async fn publish_returns_task_id_on_202() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/content_views/3/publish"))
        .and(body_json(json!({"id": 3})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client.content_view_publish(3).await.expect("publish");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn publish_returns_none_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/content_views/3/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client.content_view_publish(3).await.expect("publish");
    assert_eq!(task, None);
}

#[tokio::test]
async fn sync_then_wait_polls_to_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/repositories/9/sync"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .mount(&server)
        .await;

    // first probe sees the task running, the second sees it finished
    Mock::given(method("GET"))
        .and(path(format!("/foreman_tasks/api/tasks/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("running", "pending")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/foreman_tasks/api/tasks/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("stopped", "success")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client.repository_sync(9).await.expect("sync");
    let info = client
        .wait_if_accepted(task)
        .await
        .expect("wait")
        .expect("task info");

    assert!(info.succeeded());
}

#[tokio::test]
async fn failed_task_surfaces_state_and_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/foreman_tasks/api/tasks/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("stopped", "error")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.task_wait(TASK_ID).await.expect_err("should fail");

    match err {
        EntityError::TaskFailed { id, state, result } => {
            assert_eq!(id, TASK_ID);
            assert_eq!(state, "stopped");
            assert_eq!(result, "error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn paused_task_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/foreman_tasks/api/tasks/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("paused", "pending")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.task_wait(TASK_ID).await.expect_err("should fail");
    assert!(matches!(err, EntityError::TaskFailed { state, .. } if state == "paused"));
}

#[tokio::test]
async fn polling_times_out_on_a_stuck_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/foreman_tasks/api/tasks/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body("running", "pending")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let settings = PollSettings::new(Duration::from_millis(10), Duration::from_millis(50));
    let err = client
        .task_wait_with(TASK_ID, settings)
        .await
        .expect_err("should time out");

    assert!(matches!(err, EntityError::TaskTimeout { id, .. } if id == TASK_ID));
}

#[tokio::test]
async fn promote_posts_environment_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/content_view_versions/5/promote"))
        .and(body_json(json!({"environment_id": 12})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .content_view_version_promote(5, 12)
        .await
        .expect("promote");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn manifest_upload_is_multipart_and_task_backed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/organizations/1/subscriptions/upload"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .organization_manifest_upload(1, b"fake manifest bytes".to_vec(), None)
        .await
        .expect("upload");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn manifest_refresh_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(
            "/katello/api/v2/organizations/1/subscriptions/refresh_manifest",
        ))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .organization_manifest_refresh(1)
        .await
        .expect("refresh");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn repository_set_enable_sends_arch_and_release() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/katello/api/v2/products/3/repository_sets/8/enable"))
        .and(body_json(json!({"basearch": "x86_64", "releasever": "6Server"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .repository_set_enable(3, 8, "x86_64", Some("6Server"))
        .await
        .expect("enable");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn unique_lookup_requires_exactly_one_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/organizations/1/products"))
        .and(query_param("search", "name=\"Zoo Tools\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2, "subtotal": 2, "page": 1, "per_page": 20,
            "results": [
                {"id": 3, "name": "Zoo Tools"},
                {"id": 4, "name": "Zoo Tools"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .organization_product_id(1, "Zoo Tools")
        .await
        .expect_err("should fail");
    assert!(matches!(err, EntityError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn unique_lookup_returns_the_single_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/repositories"))
        .and(query_param("organization_id", "1"))
        .and(query_param("search", "name=\"zoo\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1, "subtotal": 1, "page": 1, "per_page": 20,
            "results": [{"id": 9, "name": "zoo"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .repository_id_by_name(1, "zoo")
        .await
        .expect("lookup");
    assert_eq!(id, 9);
}

#[tokio::test]
async fn entity_read_normalizes_reference_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/architectures/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "name": "i386",
            "operatingsystems": [
                {"id": 1, "name": "rhel65"},
                {"id": 2, "name": "rhel7"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attrs = client
        .entity_read("architecture", &PathScope::new(), 4)
        .await
        .expect("read");

    assert_eq!(attrs["operatingsystem_ids"], json!([1, 2]));
    assert!(attrs.get("operatingsystems").is_none());
}

#[tokio::test]
async fn entity_delete_reports_queued_task() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/katello/api/v2/organizations/11"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": TASK_ID})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .entity_delete("organization", &PathScope::new(), 11)
        .await
        .expect("delete");
    assert_eq!(task.as_deref(), Some(TASK_ID));
}

#[tokio::test]
async fn scoped_entities_fill_parent_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/katello/api/v2/organizations/1/sync_plans",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1, "subtotal": 1, "page": 1, "per_page": 20,
            "results": [{"id": 4, "name": "nightly", "interval": "daily"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = PathScope::new().with_id("organization_id", 1);
    let results = client
        .entity_search("sync_plan", &scope, &[])
        .await
        .expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "nightly");
}

#[tokio::test]
async fn sync_plan_create_posts_schedule() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/organizations/1/sync_plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "name": "nightly", "interval": "daily",
            "sync_date": "2014-12-01 22:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = client
        .organization_sync_plan_create(1, "nightly", "daily")
        .await
        .expect("create");
    assert_eq!(plan.id, 4);
    assert_eq!(plan.interval, "daily");
}

#[tokio::test]
async fn permission_search_passes_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/permissions"))
        .and(query_param("resource_type", "Architecture"))
        .and(query_param("per_page", "10000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2, "subtotal": 2, "page": 1, "per_page": 10000,
            "results": [
                {"id": 13, "name": "create_architectures", "resource_type": "Architecture"},
                {"id": 14, "name": "edit_architectures", "resource_type": "Architecture"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let permissions = client
        .permission_search(None, Some("Architecture"), None)
        .await
        .expect("search");
    assert_eq!(permissions.len(), 2);
    assert_eq!(permissions[0].name, "create_architectures");
}

#[tokio::test]
async fn activation_key_subscription_attach() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/activation_keys/6/subscriptions"))
        .and(body_json(json!({"id": "pool-uuid-1", "quantity": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscriptions": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .activation_key_add_subscription(6, "pool-uuid-1", 2)
        .await
        .expect("attach");
}

#[tokio::test]
async fn library_environment_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/environments"))
        .and(query_param("name", "Library"))
        .and(query_param("organization_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1, "subtotal": 1, "page": 1, "per_page": 20,
            "results": [{"id": 2, "name": "Library"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .lifecycle_environment_library_id(1)
        .await
        .expect("lookup");
    assert_eq!(id, 2);
}

#[tokio::test]
async fn ping_reports_service_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "services": {"candlepin": {"status": "ok"}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ping = client.ping().await.expect("ping");
    assert!(ping.is_ok());
}
