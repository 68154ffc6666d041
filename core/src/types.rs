//! Request shapes for the Mautic API.
//!
//! # Design
//! Records owned by Mautic (contacts, devices, emails) are open JSON objects;
//! this crate forwards whatever fields the caller supplies. The types here
//! cover only the operations that take a fixed set of named arguments, and
//! each one knows how to render itself as the body or query Mautic expects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// Open key-value record, in insertion order.
pub type Fields = Map<String, Value>;

/// Default page size for contact listings.
pub const DEFAULT_LIMIT: u32 = 50;

/// Default Mautic email type.
pub const DEFAULT_EMAIL_TYPE: &str = "list";

/// Listing parameters for `GET contacts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    pub search: String,
    pub start: u32,
    pub limit: u32,
    pub order_by: String,
    pub order_by_dir: String,
    pub published_only: bool,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            start: 0,
            limit: DEFAULT_LIMIT,
            order_by: String::new(),
            order_by_dir: String::new(),
            published_only: true,
        }
    }
}

impl ContactQuery {
    #[must_use]
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn page(mut self, start: u32, limit: u32) -> Self {
        self.start = start;
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn order(mut self, order_by: impl Into<String>, order_by_dir: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self.order_by_dir = order_by_dir.into();
        self
    }

    #[must_use]
    pub fn published_only(mut self, published_only: bool) -> Self {
        self.published_only = published_only;
        self
    }

    /// Form-encoded query string, parameters in a fixed order.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("search", &self.search)
            .append_pair("start", &self.start.to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("orderBy", &self.order_by)
            .append_pair("orderByDir", &self.order_by_dir)
            .append_pair("publishedOnly", if self.published_only { "true" } else { "false" })
            .finish()
    }
}

/// Fields for creating or replacing an email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub name: String,
    pub subject: String,
    /// Custom HTML body; omitted from the request when `None` or empty.
    pub content: Option<String>,
    pub email_type: String,
    /// Merged into the body last, overriding any key set above.
    pub extra: Option<Fields>,
}

impl EmailDraft {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            content: None,
            email_type: DEFAULT_EMAIL_TYPE.to_string(),
            extra: None,
        }
    }

    #[must_use]
    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(html.into());
        self
    }

    #[must_use]
    pub fn email_type(mut self, email_type: impl Into<String>) -> Self {
        self.email_type = email_type.into();
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: Fields) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn to_body(&self) -> Value {
        let mut body = Fields::new();
        body.insert("name".into(), Value::from(self.name.as_str()));
        body.insert("subject".into(), Value::from(self.subject.as_str()));
        body.insert("emailType".into(), Value::from(self.email_type.as_str()));
        if let Some(content) = self.content.as_deref().filter(|c| !c.is_empty()) {
            body.insert("customHtml".into(), Value::from(content));
        }
        if let Some(extra) = &self.extra {
            for (key, value) in extra {
                body.insert(key.clone(), value.clone());
            }
        }
        Value::Object(body)
    }
}

/// Fields for creating a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDraft {
    pub name: String,
    pub description: Option<String>,
    pub is_published: bool,
    /// Category alias or id.
    pub category: Option<String>,
}

impl SegmentDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_published: true,
            category: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn to_body(&self) -> Value {
        let mut body = Fields::new();
        body.insert("name".into(), Value::from(self.name.as_str()));
        body.insert("isPublished".into(), Value::from(self.is_published));
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            body.insert("category".into(), Value::from(category));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            body.insert("description".into(), Value::from(description));
        }
        Value::Object(body)
    }
}

/// A custom analytics event attached to a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub contact: u64,
    pub name: String,
    pub properties: Fields,
    /// When the event happened; Mautic uses the receive time when absent.
    pub date: Option<DateTime<Utc>>,
}

impl AnalyticsEvent {
    pub fn new(contact: u64, name: impl Into<String>, properties: Fields) -> Self {
        Self {
            contact,
            name: name.into(),
            properties,
            date: None,
        }
    }

    #[must_use]
    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "properties": self.properties,
            "contact": self.contact,
        });
        if let Some(date) = self.date {
            body["date"] = Value::from(date.to_rfc3339_opts(SecondsFormat::AutoSi, false));
        }
        body
    }
}
