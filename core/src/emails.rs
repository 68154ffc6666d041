//! Emails: templates and one-off sends.

use serde_json::{json, Value};

use crate::api::{segment, Api};
use crate::error::ApiError;
use crate::types::EmailDraft;

#[derive(Debug, Clone)]
pub struct EmailClient {
    api: Api,
}

impl EmailClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub fn get(&self, email_id: &str) -> Result<Value, ApiError> {
        self.api.get(&format!("emails/{}", segment(email_id)))
    }

    pub fn create(&self, draft: &EmailDraft) -> Result<Value, ApiError> {
        self.api.post("emails/new", Some(&draft.to_body()))
    }

    /// Replace the email (`PUT`); Mautic creates it when `email_id` is unknown.
    pub fn update(&self, email_id: &str, draft: &EmailDraft) -> Result<Value, ApiError> {
        self.api.put(&format!("emails/{}/edit", segment(email_id)), &draft.to_body())
    }

    /// Send email `email_id` to a single contact.
    pub fn email_to_contact(&self, email_id: &str, contact_id: &str) -> Result<Value, ApiError> {
        self.api.post(
            &format!("emails/{}/contact/{}/send", segment(email_id), segment(contact_id)),
            Some(&json!({})),
        )
    }
}
