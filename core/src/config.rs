//! Client configuration.
//!
//! Holds the host and credentials every resource client shares, plus the
//! transport knobs. Built once and wrapped in an `Arc` by `MauticClient`.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ApiError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Environment variable holding the Mautic base URL.
pub const ENV_HOST: &str = "MAUTIC_HOST";
/// Environment variable holding the API username.
pub const ENV_USERNAME: &str = "MAUTIC_USERNAME";
/// Environment variable holding the API password.
pub const ENV_PASSWORD: &str = "MAUTIC_PASSWORD";
/// Optional environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "MAUTIC_TIMEOUT_SECS";

/// Basic-auth credentials for the Mautic API user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `authorization` header.
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Mautic installation, without the `/api` suffix.
    pub host: String,

    pub credentials: Credentials,

    /// Upper bound for a whole request, connect through body read.
    pub timeout: Duration,

    /// Whether to verify the server's TLS certificate.
    pub verify_tls: bool,

    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration with default timeout and TLS verification on.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            credentials: Credentials::new(username, password),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_tls: true,
            user_agent: format!("mautic-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Reads `MAUTIC_HOST`, `MAUTIC_USERNAME`, `MAUTIC_PASSWORD` and the
    /// optional `MAUTIC_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a required variable is missing or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ApiError::InvalidConfig(format!("{key} is not set")))
        };

        let mut config = Self::new(
            required(ENV_HOST)?,
            required(ENV_USERNAME)?,
            required(ENV_PASSWORD)?,
        );

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::InvalidConfig(format!("{ENV_TIMEOUT_SECS} must be an integer, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Turns off TLS certificate verification.
    ///
    /// Only for self-hosted installations with self-signed certificates.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Absolute URL for an API path such as `contacts/5`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.host, path.trim_start_matches('/'))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.host.is_empty() {
            return Err(ApiError::InvalidConfig("host cannot be empty".to_string()));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ApiError::InvalidConfig(
                "host must start with http:// or https://".to_string(),
            ));
        }

        if self.credentials.username.is_empty() {
            return Err(ApiError::InvalidConfig("username cannot be empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::InvalidConfig("timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}
