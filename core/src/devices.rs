//! Push-notification (FCM) device registrations.

use serde_json::Value;

use crate::api::{segment, Api};
use crate::error::ApiError;
use crate::types::Fields;

#[derive(Debug, Clone)]
pub struct DeviceClient {
    api: Api,
}

impl DeviceClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn create(&self, data: Fields) -> Result<Value, ApiError> {
        self.api.post("fcm/devices/add", Some(&Value::Object(data)))
    }

    pub fn update(&self, device_id: &str, data: Fields) -> Result<Value, ApiError> {
        self.api
            .patch(&format!("fcm/devices/{}/edit", segment(device_id)), &Value::Object(data))
    }

    pub fn delete(&self, device_id: &str) -> Result<Value, ApiError> {
        self.api.delete(&format!("fcm/devices/{}", segment(device_id)))
    }
}
