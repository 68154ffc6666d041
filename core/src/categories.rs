//! Categories.

use serde_json::{json, Value};

use crate::api::Api;
use crate::error::ApiError;

/// Bundle used when a category is not tied to one Mautic module.
pub const DEFAULT_BUNDLE: &str = "global";

#[derive(Debug, Clone)]
pub struct CategoryClient {
    api: Api,
}

impl CategoryClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// All categories.
    pub fn get(&self) -> Result<Value, ApiError> {
        self.api.get("categories")
    }

    /// Create a category under `bundle` (`email`, `segment`, `global`, ...).
    pub fn create(&self, title: &str, bundle: &str) -> Result<Value, ApiError> {
        self.api.post(
            "categories/new",
            Some(&json!({ "title": title, "bundle": bundle })),
        )
    }

    pub fn create_global(&self, title: &str) -> Result<Value, ApiError> {
        self.create(title, DEFAULT_BUNDLE)
    }
}
