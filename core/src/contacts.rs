//! Contacts (leads).
//!
//! Every mutating call rewrites a string `country` field through
//! `normalize_country` before the request leaves the client.

use serde_json::Value;

use crate::api::{segment, unwrap_field, Api};
use crate::country::normalize_country;
use crate::error::ApiError;
use crate::types::{ContactQuery, Fields};

#[derive(Debug, Clone)]
pub struct ContactClient {
    api: Api,
}

impl ContactClient {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch one contact. `None` when the response has no `contact` key.
    pub fn get(&self, contact_id: &str) -> Result<Option<Value>, ApiError> {
        let response = self.api.get(&format!("contacts/{}", segment(contact_id)))?;
        Ok(unwrap_field(response, "contact"))
    }

    /// First contact matching `email`, or `phone` when no email is given.
    ///
    /// Returns `Ok(None)` without a request when both are absent or empty,
    /// and when the listing envelope is empty or not in the expected shape.
    pub fn find(&self, email: Option<&str>, phone: Option<&str>) -> Result<Option<Value>, ApiError> {
        let search = match (non_empty(email), non_empty(phone)) {
            (Some(email), _) => format!("email:{email}"),
            (None, Some(phone)) => format!("phone:{phone}"),
            (None, None) => return Ok(None),
        };

        let envelope = self.list(&ContactQuery::search(search))?;
        let found = first_contact(envelope);
        if found.is_none() {
            tracing::debug!("contact search returned no usable match");
        }
        Ok(found)
    }

    /// Raw listing envelope, `{"total": ..., "contacts": {...}}`.
    pub fn list(&self, query: &ContactQuery) -> Result<Value, ApiError> {
        self.api.get(&format!("contacts?{}", query.to_query_string()))
    }

    pub fn create(&self, data: Fields) -> Result<Option<Value>, ApiError> {
        let body = Value::Object(normalize_fields(data));
        let response = self.api.post("contacts/new", Some(&body))?;
        Ok(unwrap_field(response, "contact"))
    }

    /// Partial update (`PATCH`): fields not in `data` are left alone.
    pub fn update(&self, contact_id: &str, data: Fields) -> Result<Option<Value>, ApiError> {
        let body = Value::Object(normalize_fields(data));
        let response = self.api.patch(&format!("contacts/{}/edit", segment(contact_id)), &body)?;
        Ok(unwrap_field(response, "contact"))
    }

    /// Full replace (`PUT`), or `create` when `contact_id` is `None` or empty.
    pub fn upsert(&self, contact_id: Option<&str>, data: Fields) -> Result<Option<Value>, ApiError> {
        let Some(contact_id) = non_empty(contact_id) else {
            return self.create(data);
        };
        let body = Value::Object(normalize_fields(data));
        let response = self.api.put(&format!("contacts/{}/edit", segment(contact_id)), &body)?;
        Ok(unwrap_field(response, "contact"))
    }

    /// Add a do-not-contact flag on `channel` (e.g. `email`, `sms`).
    ///
    /// `reason` is Mautic's numeric code: 1 unsubscribed, 2 bounced, 3 manual.
    pub fn dnc(&self, contact_id: &str, channel: &str, reason: i64) -> Result<Option<Value>, ApiError> {
        let body = serde_json::json!({ "reason": reason });
        let path = format!("contacts/{}/dnc/{}/add", segment(contact_id), segment(channel));
        let response = self.api.post(&path, Some(&body))?;
        Ok(unwrap_field(response, "contact"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn normalize_fields(mut data: Fields) -> Fields {
    if let Some(Value::String(country)) = data.get_mut("country") {
        *country = normalize_country(country);
    }
    data
}

/// Pull the first contact out of a listing envelope, if `total` says there is
/// one. `total` arrives as a number or a numeric string; `contacts` is an
/// object keyed by id, or an array.
fn first_contact(envelope: Value) -> Option<Value> {
    let total = match envelope.get("total")? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    if total == 0 {
        return None;
    }
    match unwrap_field(envelope, "contacts")? {
        Value::Object(contacts) => contacts.into_iter().next().map(|(_, contact)| contact),
        Value::Array(contacts) => contacts.into_iter().next(),
        _ => None,
    }
}
