//! In-process transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::api::Api;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Records every request and replays queued responses, `200 {}` when empty.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub(crate) fn config() -> ClientConfig {
        ClientConfig::new("https://mautic.test", "user", "pass")
    }

    pub(crate) fn api() -> (Api, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let api = Api::new(Arc::new(Self::config()), transport.clone());
        (api, transport)
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        });
    }

    pub(crate) fn respond_json(&self, body: Value) {
        self.respond(200, &body.to_string());
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: "{}".to_string(),
            }))
    }
}

impl HttpRequest {
    pub(crate) fn json_body(&self) -> Value {
        serde_json::from_str(self.body.as_deref().expect("request has no body")).unwrap()
    }

    /// Path and query after the `/api/` prefix.
    pub(crate) fn api_path(&self) -> &str {
        self.url
            .split_once("/api/")
            .map(|(_, rest)| rest)
            .expect("url has no /api/ segment")
    }
}
