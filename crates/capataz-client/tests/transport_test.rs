//! Transport tests against a mock server
//!
//! These tests exercise request building, authentication headers, and
//! status-code handling without a live management server.

use capataz_client::{CapatazHttpClient, ClientError, HttpClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CapatazHttpClient {
    CapatazHttpClient::new(HttpClientConfig::new(&server.uri()).with_auth("admin", "changeme"))
        .expect("client")
}

#[tokio::test]
async fn get_deserializes_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: serde_json::Value = client.get("katello/api/v2/ping").await.expect("get");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn requests_carry_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let _: serde_json::Value = client.get("api/v2/hosts").await.expect("get");
}

#[tokio::test]
async fn get_with_query_sends_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/katello/api/v2/products"))
        .and(query_param("search", "name=\"tools\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let _: serde_json::Value = client
        .get_with_query("katello/api/v2/products", &[("search", "name=\"tools\"")])
        .await
        .expect("get");
}

#[tokio::test]
async fn http_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("Resource host not found by id '42'"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get::<serde_json::Value>("api/v2/hosts/42")
        .await
        .expect_err("should fail");

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn post_accepting_preserves_202_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/katello/api/v2/content_views/3/publish"))
        .and(body_json(json!({"id": 3})))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"id": "5d8bcfcd-9cb6-4b9d-b2b6-2d9b2584f478"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = client
        .post_accepting("katello/api/v2/content_views/3/publish", &json!({"id": 3}))
        .await
        .expect("post");

    assert_eq!(reply.status.as_u16(), 202);
    assert_eq!(reply.body["id"], "5d8bcfcd-9cb6-4b9d-b2b6-2d9b2584f478");
}

#[tokio::test]
async fn delete_accepting_tolerates_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/architectures/7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = client
        .delete_accepting("api/v2/architectures/7")
        .await
        .expect("delete");

    assert_eq!(reply.status.as_u16(), 200);
    assert!(reply.body.is_null());
}
