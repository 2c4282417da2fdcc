mod common;

use jobsearch_bot::api::{AdzunaClient, ListingSource};
use jobsearch_bot::core::FetchError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_sends_search_parameters_and_decodes_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gb/search/1"))
        .and(query_param("app_id", "app-id"))
        .and(query_param("app_key", "secret-key"))
        .and(query_param("results_per_page", "5"))
        .and(query_param("what", "python"))
        .and(query_param("sort_by", "date"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"count": 1, "results": [common::listing("1")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = common::config_for(&server.uri());
    let client = AdzunaClient::new(config.adzuna).unwrap();

    let document = client.fetch().await.expect("fetch ok");
    assert_eq!(document["results"][0]["id"], "1");
}

#[tokio::test]
async fn fetch_reports_upstream_status_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gb/search/1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"exception": "AUTH_FAIL", "display": "Authorisation failed"})),
        )
        .mount(&server)
        .await;

    let client = AdzunaClient::new(common::config_for(&server.uri()).adzuna).unwrap();

    match client.fetch().await {
        Err(FetchError::UpstreamStatus { status, reason, body }) => {
            assert_eq!(status, 401);
            assert_eq!(reason, "Unauthorized");
            assert!(body.contains("AUTH_FAIL"));
        }
        other => panic!("expected upstream status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_treats_no_content_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = AdzunaClient::new(common::config_for(&server.uri()).adzuna).unwrap();

    assert!(matches!(
        client.fetch().await,
        Err(FetchError::UpstreamStatus { status: 204, .. })
    ));
}

#[tokio::test]
async fn fetch_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = AdzunaClient::new(common::config_for(&server.uri()).adzuna).unwrap();

    assert!(matches!(client.fetch().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn fetch_connection_refused_hides_credentials() {
    // Nothing listens on port 1.
    let client = AdzunaClient::new(common::config_for("http://127.0.0.1:1").adzuna).unwrap();

    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Connectivity { .. }));
    assert!(!err.to_string().contains("secret-key"));
}
