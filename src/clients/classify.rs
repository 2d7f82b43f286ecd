//! Classification of failed responses into domain errors.

use serde_json::Value;

use crate::clients::{ApiError, GenericError, HttpError, HttpResponse};

/// Turns a failed response into a typed error.
///
/// The checks run in order:
///
/// 1. no `Content-Type` header
/// 2. a `Content-Type` other than `application/json`
/// 3. an empty body
/// 4. a JSON body whose first `errors` entry has an integral `code`, a string
///    `error` and a string `moreInfo`, which becomes an [`ApiError`]
/// 5. anything else, reported as `HTTP <status> <statusText>`
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use moysklad::clients::{classify_error, HttpError, HttpResponse};
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
/// let body = r#"{"errors":[{"code":1034,"error":"msg","moreInfo":"url"}]}"#;
/// let response = HttpResponse::new(400, "Bad Request", headers, body);
///
/// let HttpError::Api(error) = classify_error(&response) else { panic!() };
/// assert_eq!((error.message.as_str(), error.status, error.code), ("msg", 400, 1034));
/// ```
#[must_use]
pub fn classify_error(response: &HttpResponse) -> HttpError {
    let status = response.status;

    if response.content_type().is_none() {
        return GenericError::new("Response has no Content-Type header", status).into();
    }

    if !response.is_json() {
        return GenericError::new("Response Content-Type is not application/json", status).into();
    }

    if response.body.is_empty() {
        return GenericError::new("Response body is empty", status).into();
    }

    if let Some(error) = first_api_error(&response.body, status) {
        return error.into();
    }

    GenericError::new(
        format!("HTTP {status} {}", response.status_text)
            .trim_end()
            .to_string(),
        status,
    )
    .into()
}

fn first_api_error(body: &str, status: u16) -> Option<ApiError> {
    let value: Value = serde_json::from_str(body).ok()?;
    let first = value.get("errors")?.as_array()?.first()?;

    Some(ApiError {
        message: first.get("error")?.as_str()?.to_string(),
        status,
        code: integral_code(first.get("code")?)?,
        more_info: first.get("moreInfo")?.as_str()?.to_string(),
    })
}

/// Reads an error code written either as an integer or as a float with no
/// fractional part, such as `1034.0`.
#[allow(clippy::cast_possible_truncation)]
fn integral_code(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|code| code.fract() == 0.0)
            .map(|code| code as i64)
    })
}
