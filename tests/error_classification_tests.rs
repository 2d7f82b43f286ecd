//! Integration tests for failed-response classification.
//!
//! Each test answers a request with a non-2xx response and checks which
//! error the client returns.

use moysklad::{AuthCredential, BaseUrl, ClientConfig, HttpClient, HttpError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn failing_with(template: ResponseTemplate) -> HttpError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .auth(AuthCredential::token("test-token").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    client.get("entity/product", None).await.unwrap_err()
}

#[tokio::test]
async fn test_structured_api_error() {
    let error = failing_with(ResponseTemplate::new(404).set_body_json(json!({
        "errors": [
            {
                "error": "Object not found",
                "code": 1021,
                "moreInfo": "https://dev.moysklad.ru/doc/api/remap/1.2/#error_1021"
            },
            {
                "error": "Second error",
                "code": 1022,
                "moreInfo": "ignored"
            }
        ]
    })))
    .await;

    let HttpError::Api(api) = error else {
        panic!("expected ApiError");
    };
    assert_eq!(api.message, "Object not found");
    assert_eq!(api.status, 404);
    assert_eq!(api.code, 1021);
    assert_eq!(
        api.more_info,
        "https://dev.moysklad.ru/doc/api/remap/1.2/#error_1021"
    );
}

#[tokio::test]
async fn test_api_error_with_charset_content_type() {
    let body = r#"{"errors":[{"error":"Bad filter","code":1034,"moreInfo":"url"}]}"#;
    let error = failing_with(
        ResponseTemplate::new(412).set_body_raw(body, "application/json;charset=utf-8"),
    )
    .await;

    assert!(matches!(error, HttpError::Api(ref api) if api.code == 1034 && api.status == 412));
}

#[tokio::test]
async fn test_float_error_code_without_fraction() {
    let body = r#"{"errors":[{"error":"Bad filter","code":1034.0,"moreInfo":"url"}]}"#;
    let error = failing_with(ResponseTemplate::new(412).set_body_raw(body, "application/json")).await;

    assert!(matches!(error, HttpError::Api(ref api) if api.code == 1034));
}

#[tokio::test]
async fn test_non_json_content_type_is_generic() {
    let error = failing_with(
        ResponseTemplate::new(502).set_body_raw("<html>Bad Gateway</html>", "text/html"),
    )
    .await;

    let HttpError::Generic(generic) = error else {
        panic!("expected GenericError");
    };
    assert_eq!(generic.message, "Response Content-Type is not application/json");
    assert_eq!(generic.status, 502);
}

#[tokio::test]
async fn test_missing_content_type_is_generic() {
    let error = failing_with(ResponseTemplate::new(503)).await;

    assert_eq!(error.to_string(), "Response has no Content-Type header");
    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn test_empty_json_body_is_generic() {
    let error =
        failing_with(ResponseTemplate::new(500).set_body_raw("", "application/json")).await;

    assert_eq!(error.to_string(), "Response body is empty");
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_json_without_error_entries_reports_status_line() {
    let error = failing_with(ResponseTemplate::new(400).set_body_json(json!({"errors": []}))).await;

    assert!(matches!(error, HttpError::Generic(_)));
    assert_eq!(error.to_string(), "HTTP 400 Bad Request");
}

#[tokio::test]
async fn test_incomplete_error_entry_reports_status_line() {
    let error = failing_with(
        ResponseTemplate::new(403)
            .set_body_json(json!({"errors": [{"error": "Forbidden", "code": "not-a-number"}]})),
    )
    .await;

    assert_eq!(error.to_string(), "HTTP 403 Forbidden");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // nothing listens on port 1
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .auth(AuthCredential::token("test-token").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let error = client.get("entity/product", None).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
    assert_eq!(error.status(), None);
}
