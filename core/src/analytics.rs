//! Custom analytics events.

use serde_json::Value;

use crate::api::Api;
use crate::error::ApiError;
use crate::types::AnalyticsEvent;

#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    api: Api,
}

impl AnalyticsClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn log_event(&self, event: &AnalyticsEvent) -> Result<Value, ApiError> {
        self.api.post("analytic/log/event", Some(&event.to_body()))
    }
}
