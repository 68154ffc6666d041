//! Segments, called "lists" by the Mautic API.

use serde_json::{json, Value};

use crate::api::{segment, unwrap_field, Api};
use crate::error::ApiError;
use crate::types::SegmentDraft;

#[derive(Debug, Clone)]
pub struct SegmentClient {
    api: Api,
}

impl SegmentClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Create a segment and return the `list` record Mautic sends back.
    ///
    /// # Errors
    ///
    /// `MissingField("list")` if the response lacks the record.
    pub fn create(&self, draft: &SegmentDraft) -> Result<Value, ApiError> {
        let response = self.api.post("segments/new", Some(&draft.to_body()))?;
        unwrap_field(response, "list").ok_or(ApiError::MissingField("list"))
    }

    pub fn add_contact(&self, segment_id: &str, contact_id: &str) -> Result<Value, ApiError> {
        let path = format!("segments/{}/contact/{}/add", segment(segment_id), segment(contact_id));
        self.api.post(&path, None)
    }

    /// Add several contacts in one request. Ids are sent in the given order,
    /// as whatever JSON type they convert to.
    pub fn add_contacts<I, T>(&self, segment_id: &str, contact_ids: I) -> Result<Value, ApiError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let ids: Vec<Value> = contact_ids.into_iter().map(Into::into).collect();
        self.api.post(
            &format!("segments/{}/contacts/add", segment(segment_id)),
            Some(&json!({ "ids": ids })),
        )
    }

    pub fn remove_contact(&self, segment_id: &str, contact_id: &str) -> Result<Value, ApiError> {
        let path = format!("segments/{}/contact/{}/remove", segment(segment_id), segment(contact_id));
        self.api.post(&path, None)
    }
}
