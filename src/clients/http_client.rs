//! HTTP client for MoySklad API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the API.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::clients::classify::classify_error;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestPath};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;
use crate::query::SearchParameters;

// Fixed header values. Caller headers with the same name are dropped.
const CONTENT_TYPE: &str = "application/json";
const ACCEPT: &str = "application/json;charset=utf-8";
const ACCEPT_ENCODING: &str = "gzip";

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - URL construction from the configured base URL or an absolute URL
/// - Authentication and the fixed JSON headers
/// - Classification of non-2xx responses into typed errors
///
/// Each call issues exactly one HTTP request. There are no retries and no
/// caching.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone: clones share the
/// connection pool and the configuration.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad::{AuthCredential, ClientConfig, HttpClient};
///
/// let config = ClientConfig::builder()
///     .auth(AuthCredential::token("my-token")?)
///     .build()?;
/// let client = HttpClient::new(config)?;
///
/// let response = client.get("entity/product", None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Shared, immutable configuration.
    config: Arc<ClientConfig>,
    /// Fixed headers included in all requests.
    default_headers: Vec<(&'static str, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let default_headers = vec![
            ("Authorization", config.auth().authorization_header()),
            ("User-Agent", config.user_agent().to_string()),
            ("Content-Type", CONTENT_TYPE.to_string()),
            ("Accept", ACCEPT.to_string()),
            ("Accept-Encoding", ACCEPT_ENCODING.to_string()),
        ];

        Ok(Self {
            client,
            config: Arc::new(config),
            default_headers,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the fixed headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(&'static str, String)] {
        &self.default_headers
    }

    /// Builds an absolute URL for a path or URL.
    ///
    /// Absolute URLs are kept unchanged; other paths are appended to the base
    /// URL, with runs of `/` collapsed except for the scheme separator.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// assert_eq!(
    ///     client.build_url(["entity", "/product/"]),
    ///     "https://api.moysklad.ru/api/remap/1.2/entity/product/"
    /// );
    /// ```
    #[must_use]
    pub fn build_url(&self, path: impl Into<RequestPath>) -> String {
        build_url(self.config.base_url().as_ref(), &path.into())
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the body cannot be serialized (`Json`)
    /// - a network error occurs (`Network`)
    /// - a non-2xx response is received (`Generic` or `Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut url = self.build_url(request.path);
        if let Some(params) = request.search_parameters.filter(|p| !p.is_empty()) {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&params.to_query_string());
        }

        tracing::debug!("{} {}", request.method, url);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if let Some(extra) = &request.headers {
            for (key, value) in extra {
                if !self.is_fixed_header(key) {
                    req_builder = req_builder.header(key, value);
                }
            }
        }
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(*key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_vec(body)?);
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            headers,
            body,
        );

        if response.is_ok() {
            return Ok(response);
        }

        let error = classify_error(&response);
        tracing::debug!(
            "{} {} failed with status {}: {}",
            request.method,
            url,
            response.status,
            error
        );
        Err(error)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: impl Into<RequestPath>,
        search_parameters: Option<SearchParameters>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path.into(), None, search_parameters)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post<B: Serialize + Sync>(
        &self,
        path: impl Into<RequestPath>,
        body: &B,
        search_parameters: Option<SearchParameters>,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(body)?;
        self.make_request(HttpMethod::Post, path.into(), Some(body), search_parameters)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put<B: Serialize + Sync>(
        &self,
        path: impl Into<RequestPath>,
        body: &B,
        search_parameters: Option<SearchParameters>,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(body)?;
        self.make_request(HttpMethod::Put, path.into(), Some(body), search_parameters)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(
        &self,
        path: impl Into<RequestPath>,
        search_parameters: Option<SearchParameters>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path.into(), None, search_parameters)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: RequestPath,
        body: Option<serde_json::Value>,
        search_parameters: Option<SearchParameters>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path).maybe_search_parameters(search_parameters);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()).await
    }

    fn is_fixed_header(&self, name: &str) -> bool {
        self.default_headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Builds an absolute URL from a base URL and a path or URL.
///
/// Segments are joined with `/`. A path whose first part starts with `http`
/// is then used unchanged. Anything else is appended to `base` and every run
/// of two or more `/` is collapsed to one, except directly after a `:`.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::build_url;
///
/// let base = "https://api.moysklad.ru/api/remap/1.2";
/// assert_eq!(
///     build_url(base, &"/entity//product".into()),
///     "https://api.moysklad.ru/api/remap/1.2/entity/product"
/// );
/// assert_eq!(
///     build_url(base, &"https://example.com/a/b".into()),
///     "https://example.com/a/b"
/// );
/// ```
#[must_use]
pub fn build_url(base: &str, path: &RequestPath) -> String {
    let joined = path.joined();
    if path.is_absolute() {
        joined
    } else {
        collapse_slashes(&format!("{base}/{joined}"))
    }
}

fn collapse_slashes(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;

    for c in url.chars() {
        if c == '/' && prev == Some('/') && before_prev != Some(':') {
            continue;
        }
        out.push(c);
        before_prev = prev;
        prev = Some(c);
    }
    out
}
