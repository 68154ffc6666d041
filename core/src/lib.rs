//! Blocking client for the Mautic REST API.
//!
//! # Overview
//! `MauticClient` exposes one handle per resource (`contacts`, `devices`,
//! `emails`, `segments`, `categories`, `analytics`). Each call is a single
//! authenticated request to `{host}/api/...` whose JSON response is returned
//! as `serde_json::Value`, or with the relevant key unwrapped.
//!
//! # Design
//! - Records are open JSON objects; the client forwards caller fields and
//!   only rewrites a contact's `country` into Mautic's spelling.
//! - Requests are plain `HttpRequest` data executed by a `Transport`. The
//!   default is `UreqTransport`; tests and callers can supply their own.
//! - Non-2xx responses surface as `ApiError::Http` with status and body.
//!   There is no retry, caching or pagination.
//!
//! ```no_run
//! use mautic_core::{Fields, MauticClient};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), mautic_core::ApiError> {
//! let client = MauticClient::new("api-user", "secret", "https://mautic.example.com")?;
//!
//! let mut lead = Fields::new();
//! lead.insert("email".into(), json!("jane@example.com"));
//! lead.insert("country".into(), json!("USA"));
//! let created = client.contacts.create(lead)?;
//!
//! if let Some(contact) = client.contacts.find(Some("jane@example.com"), None)? {
//!     println!("found {}", contact["id"]);
//! }
//! # let _ = created;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod api;
pub mod categories;
pub mod client;
pub mod config;
pub mod contacts;
pub mod country;
pub mod devices;
pub mod emails;
pub mod error;
pub mod http;
pub mod segments;
pub mod types;

#[cfg(test)]
mod testing;

pub use analytics::AnalyticsClient;
pub use api::Api;
pub use categories::CategoryClient;
pub use client::MauticClient;
pub use config::{ClientConfig, Credentials};
pub use contacts::ContactClient;
pub use country::normalize_country;
pub use devices::DeviceClient;
pub use emails::EmailClient;
pub use error::{ApiError, RemoteError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use segments::SegmentClient;
pub use types::{AnalyticsEvent, ContactQuery, EmailDraft, Fields, SegmentDraft};
