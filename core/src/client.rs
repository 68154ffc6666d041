//! `MauticClient`, one handle per API resource.
//!
//! # Design
//! Every resource client holds a clone of the same `Api`, which in turn
//! shares one `Arc<ClientConfig>` and one `Arc<dyn Transport>`. Nothing is
//! mutated after construction, so the client can be cloned and used from
//! several threads at once.

use std::sync::Arc;

use crate::analytics::AnalyticsClient;
use crate::api::Api;
use crate::categories::CategoryClient;
use crate::config::ClientConfig;
use crate::contacts::ContactClient;
use crate::devices::DeviceClient;
use crate::emails::EmailClient;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::segments::SegmentClient;

/// Entry point for the Mautic REST API.
#[derive(Debug, Clone)]
pub struct MauticClient {
    pub contacts: ContactClient,
    pub devices: DeviceClient,
    pub emails: EmailClient,
    pub segments: SegmentClient,
    pub categories: CategoryClient,
    pub analytics: AnalyticsClient,
    config: Arc<ClientConfig>,
}

impl MauticClient {
    /// Client with the default 3 second timeout and TLS verification on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `host` is not an http(s) URL or `username`
    /// is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(host, username, password))
    }

    /// Client over the stock ureq transport.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = Arc::new(UreqTransport::new(&config));
        Self::with_transport(config, transport)
    }

    /// Client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, ApiError> {
        config.validate()?;
        let config = Arc::new(config);
        let api = Api::new(Arc::clone(&config), transport);

        Ok(Self {
            contacts: ContactClient::new(api.clone()),
            devices: DeviceClient::new(api.clone()),
            emails: EmailClient::new(api.clone()),
            segments: SegmentClient::new(api.clone()),
            categories: CategoryClient::new(api.clone()),
            analytics: AnalyticsClient::new(api),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::RecordingTransport;

    #[test]
    fn new_validates_host() {
        assert!(MauticClient::new("api", "secret", "https://mautic.example.com").is_ok());
        assert!(matches!(
            MauticClient::new("api", "secret", "mautic.example.com"),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_is_exposed() {
        let client = MauticClient::new("api", "secret", "https://mautic.example.com/").unwrap();
        assert_eq!(client.config().host, "https://mautic.example.com");
        assert_eq!(client.config().credentials.username, "api");
    }

    #[test]
    fn resources_share_credentials_and_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let client = MauticClient::with_transport(RecordingTransport::config(), transport.clone()).unwrap();

        client.contacts.get("1").unwrap();
        client.categories.get().unwrap();
        client.emails.email_to_contact("3", "7").unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        for request in &sent {
            assert!(request.url.starts_with("https://mautic.test/api/"));
            assert_eq!(request.header("authorization"), Some("Basic dXNlcjpwYXNz"));
        }
        assert_eq!(sent[2].json_body(), json!({}));
    }

    #[test]
    fn clones_are_usable_across_threads() {
        let transport = Arc::new(RecordingTransport::default());
        let client = MauticClient::with_transport(RecordingTransport::config(), transport.clone()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = client.clone();
                std::thread::spawn(move || client.contacts.get(&i.to_string()).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(transport.requests().len(), 4);
    }
}
