//! Shared request helper used by every resource client.

use std::sync::Arc;

use serde_json::Value;
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Configuration plus transport, cheap to clone.
#[derive(Debug, Clone)]
pub struct Api {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Api {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the request for `path` without sending it.
    pub fn build(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![
            (
                "authorization".to_string(),
                self.config.credentials.basic_auth_header(),
            ),
            ("user-agent".to_string(), self.config.user_agent.clone()),
        ];

        let body = match body {
            Some(value) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: self.config.api_url(path),
            headers,
            body,
        })
    }

    /// Sends one request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// `Http` for non-2xx responses, `Deserialization` for a 2xx body that is
    /// not JSON, and whatever the transport reports when no response arrives.
    pub fn request(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let request = self.build(method, path, body)?;
        tracing::debug!(%method, url = %request.url, "mautic request");

        let response = self.transport.execute(request)?;
        tracing::debug!(%method, path, status = response.status, "mautic response");

        parse(response)
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Get, path, None)
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Post, path, body)
    }

    pub fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(HttpMethod::Put, path, Some(body))
    }

    pub fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(HttpMethod::Patch, path, Some(body))
    }

    pub fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Delete, path, None)
    }
}

/// Map a response to its JSON body, or to `ApiError::Http` when not 2xx.
fn parse(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        tracing::warn!(status = response.status, "mautic request failed");
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Percent-encode one path segment, so an id holding `/`, `?` or `#` stays a
/// single segment instead of rerouting the request.
///
/// Plain ids such as `42` come out unchanged.
pub(crate) fn segment(raw: &str) -> String {
    // Form encoding is path-safe except for space, which it writes as `+`.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

/// Take `key` out of an object response.
pub(crate) fn unwrap_field(mut value: Value, key: &str) -> Option<Value> {
    value.as_object_mut().and_then(|object| object.remove(key))
}
