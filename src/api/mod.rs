//! Recipe API Client
//!
//! Frontend bindings to the remote recipe API, one function per endpoint.

mod images;
mod recipes;
mod users;

use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status; `detail` is the API's explanation
    #[error("{detail}")]
    Status { status: u16, detail: String },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Could not read file: {0}")]
    File(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client bound to one API base and (optionally) one login token
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { http: reqwest::Client::new(), config, token }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.api_url(path))
    }

    /// Request carrying the bearer token; fails without a login
    fn authed(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::NotLoggedIn)?;
        Ok(self.request(method, path).bearer_auth(token))
    }
}

/// Send a request and turn error statuses into `ApiError::Status`
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body).unwrap_or_else(|| status_text(status.as_u16(), &body));
    Err(ApiError::Status { status: status.as_u16(), detail })
}

/// Message from a FastAPI error body (`{"detail": ...}`)
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        // Validation errors: [{"loc": [...], "msg": "...", ...}]
        Value::Array(errors) => {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|error| error.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn status_text(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "Incorrect username or password"}"#).as_deref(),
            Some("Incorrect username or password")
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail": [
            {"loc": ["body", "title"], "msg": "field required", "type": "missing"},
            {"loc": ["body", "portions"], "msg": "value is not a valid integer"}
        ]}"#;

        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; value is not a valid integer")
        );
    }

    #[test]
    fn test_extract_detail_missing() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"message": "x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn test_status_text_fallback() {
        assert_eq!(status_text(502, "  "), "Request failed with status 502");
        assert_eq!(status_text(500, "Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn test_authed_requires_token() {
        let client = ApiClient::new(ClientConfig::new("http://localhost/"), None);
        assert!(matches!(client.authed(Method::DELETE, "image/1"), Err(ApiError::NotLoggedIn)));
    }
}
