//! Integration tests for the HTTP client.
//!
//! These tests run the client against a local mock server and verify URL
//! composition, authentication, fixed headers and query parameters.

use moysklad::query::{
    ExpandTree, Filter, FilterOperator, Order, PageRequestOptions, SearchParameters,
};
use moysklad::{
    compose_search_parameters, AuthCredential, BaseUrl, ClientConfig, HttpClient, HttpMethod,
    HttpRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer, auth: AuthCredential) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .auth(auth)
        .user_agent("test-agent/1.0")
        .build()
        .unwrap();
    HttpClient::new(config).unwrap()
}

fn token_client(server: &MockServer) -> HttpClient {
    create_test_client(server, AuthCredential::token("test-token").unwrap())
}

// ============================================================================
// Authentication and fixed headers
// ============================================================================

#[tokio::test]
async fn test_basic_auth_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(header("Authorization", "Basic YTpi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, AuthCredential::basic("a", "b").unwrap());
    let response = client.get("entity/product", None).await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_bearer_token_and_fixed_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("User-Agent", "test-agent/1.0"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json;charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    client.get("entity/product", None).await.unwrap();
}

#[tokio::test]
async fn test_fixed_headers_win_over_caller_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("X-Lognex-Precision", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "entity/product")
        .header("authorization", "Bearer someone-else")
        .header("X-Lognex-Precision", "true")
        .build();

    client.request(request).await.unwrap();
}

// ============================================================================
// URL composition
// ============================================================================

#[tokio::test]
async fn test_segments_are_joined_and_slashes_collapsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = token_client(&server);
    client.get(["entity/", "/product", "42"], None).await.unwrap();
    client.get("/entity//product///42", None).await.unwrap();
}

#[tokio::test]
async fn test_absolute_url_bypasses_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/other/place"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(BaseUrl::new("https://api.moysklad.ru/api/remap/1.2").unwrap())
        .auth(AuthCredential::token("t").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let url = format!("{}/other/place", server.uri());
    client.get(url, None).await.unwrap();
}

#[test]
fn test_build_url_collapses_only_relative_paths() {
    let config = ClientConfig::builder()
        .auth(AuthCredential::token("t").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    assert_eq!(
        client.build_url(["entity", "/product/"]),
        "https://api.moysklad.ru/api/remap/1.2/entity/product/"
    );
    assert_eq!(
        client.build_url("https://example.com//a//b"),
        "https://example.com//a//b"
    );
}

// ============================================================================
// Query parameters and bodies
// ============================================================================

#[tokio::test]
async fn test_composed_options_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/customerorder"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .and(query_param("expand", "agent,positions.assortment"))
        .and(query_param("filter", "applicable=true;sum>1000"))
        .and(query_param("order", "moment,desc"))
        .and(query_param("search", "ООО Ромашка"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = PageRequestOptions::new()
        .limit(50)
        .offset(100)
        .expand(
            ExpandTree::new()
                .field("agent", true)
                .nested("positions", ExpandTree::new().field("assortment", true)),
        )
        .filter(Filter::equals("applicable", true))
        .filter(Filter::new("sum", FilterOperator::Gt, 1000))
        .order(Order::desc("moment"))
        .search("ООО Ромашка");

    let params = compose_search_parameters(&options).unwrap();
    let client = token_client(&server);
    client.get("entity/customerorder", params).await.unwrap();
}

#[tokio::test]
async fn test_query_is_appended_to_url_with_existing_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("fields", "stock"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = SearchParameters::new();
    params.push("limit", "10");

    let client = token_client(&server);
    client
        .get("entity/product?fields=stock", Some(params))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_and_put_send_json_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entity/product"))
        .and(body_json(json!({"name": "Chair"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "Chair"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/entity/product/1"))
        .and(body_json(json!({"name": "Table"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "Table"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/entity/product/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server);

    let created: serde_json::Value = client
        .post("entity/product", &json!({"name": "Chair"}), None)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(created["id"], "1");

    let updated: serde_json::Value = client
        .put(["entity", "product", "1"], &json!({"name": "Table"}), None)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(updated["name"], "Table");

    let deleted = client.delete(["entity", "product", "1"], None).await.unwrap();
    assert!(deleted.is_ok());
}

#[tokio::test]
async fn test_response_exposes_headers_and_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"rows": []}))
                .insert_header("X-RateLimit-Limit", "45")
                .insert_header("X-RateLimit-Remaining", "44"),
        )
        .mount(&server)
        .await;

    let client = token_client(&server);
    let response = client.get("entity/product", None).await.unwrap();

    assert!(response.is_json());
    assert_eq!(response.header("x-ratelimit-limit"), Some("45"));
    let rate_limit = response.rate_limit().unwrap();
    assert_eq!(rate_limit.limit, 45);
    assert_eq!(rate_limit.remaining, 44);
}

#[tokio::test]
async fn test_invalid_json_success_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let client = token_client(&server);
    let result: Result<serde_json::Value, _> =
        client.get("entity/product", None).await.unwrap().json();

    assert!(matches!(result, Err(moysklad::HttpError::Json(_))));
}
