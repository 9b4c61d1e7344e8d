//! Configuration types for the Fantasy Sports API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with the Yahoo Fantasy Sports
//! service.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`FantasyConfig`]: The main configuration struct holding all SDK settings
//! - [`FantasyConfigBuilder`]: A builder for constructing [`FantasyConfig`] instances
//! - [`ClientId`]: A validated OAuth client ID newtype
//! - [`ClientSecret`]: A validated OAuth client secret newtype with masked debug output
//! - [`HostUrl`]: A validated application host URL
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::{FantasyConfig, ClientId, ClientSecret};
//!
//! let config = FantasyConfig::builder()
//!     .client_id(ClientId::new("my-consumer-key").unwrap())
//!     .client_secret(ClientSecret::new("my-consumer-secret").unwrap())
//!     .scopes("fspt-w".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, HostUrl};

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default consent-page URL for the authorization handshake.
pub const DEFAULT_AUTH_URL: &str = "https://api.login.yahoo.com/oauth2/request_auth";

/// Default token-exchange URL for the authorization handshake.
pub const DEFAULT_TOKEN_URL: &str = "https://api.login.yahoo.com/oauth2/get_token";

/// Default base URL of the Fantasy Sports resource API.
pub const DEFAULT_API_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Configuration for the Fantasy Sports API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// OAuth client credentials, requested scopes, the application host used to
/// build the OAuth redirect URI, and the remote service endpoints.
///
/// # Thread Safety
///
/// `FantasyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Endpoint Overrides
///
/// The consent, token, and API endpoints default to the live Yahoo hosts and
/// can be overridden through the builder. Overrides exist for proxies and for
/// pointing integration tests at a local mock server; production callers
/// normally leave them untouched.
///
/// # Example
///
/// ```rust
/// use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl};
///
/// let config = FantasyConfig::builder()
///     .client_id(ClientId::new("key").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .host(HostUrl::new("https://myapp.example.com").unwrap())
///     .landing_url("/dashboard")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.landing_url(), Some("/dashboard"));
/// ```
#[derive(Clone, Debug)]
pub struct FantasyConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    scopes: AuthScopes,
    host: Option<HostUrl>,
    landing_url: Option<String>,
    auth_url: String,
    token_url: String,
    api_url: String,
    user_agent_prefix: Option<String>,
}

impl FantasyConfig {
    /// Creates a new builder for constructing a `FantasyConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fantasy_api::{FantasyConfig, ClientId, ClientSecret};
    ///
    /// let config = FantasyConfig::builder()
    ///     .client_id(ClientId::new("key").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> FantasyConfigBuilder {
        FantasyConfigBuilder::new()
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the requested OAuth scopes.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the application host URL, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the post-authorization landing location, if configured.
    ///
    /// The landing location is opaque to this SDK; callers redirect the end
    /// user there after a successful authorization.
    #[must_use]
    pub fn landing_url(&self) -> Option<&str> {
        self.landing_url.as_deref()
    }

    /// Returns the consent-page URL.
    #[must_use]
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Returns the token-exchange URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns the resource API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify FantasyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FantasyConfig>();
};

/// Builder for constructing [`FantasyConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `client_id` and `client_secret`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `scopes`: Empty
/// - `host`: `None`
/// - `landing_url`: `None`
/// - `auth_url` / `token_url` / `api_url`: the live Yahoo endpoints
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl};
///
/// let config = FantasyConfig::builder()
///     .client_id(ClientId::new("key").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .host(HostUrl::new("https://myapp.example.com").unwrap())
///     .scopes("fspt-r".parse().unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct FantasyConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    scopes: Option<AuthScopes>,
    host: Option<HostUrl>,
    landing_url: Option<String>,
    auth_url: Option<String>,
    token_url: Option<String>,
    api_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl FantasyConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client ID (required).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Sets the requested OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the application host URL used to build the OAuth redirect URI.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the post-authorization landing location.
    #[must_use]
    pub fn landing_url(mut self, landing_url: impl Into<String>) -> Self {
        self.landing_url = Some(landing_url.into());
        self
    }

    /// Overrides the consent-page URL.
    #[must_use]
    pub fn auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = Some(auth_url.into());
        self
    }

    /// Overrides the token-exchange URL.
    #[must_use]
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self
    }

    /// Overrides the resource API base URL.
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header on outgoing requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`FantasyConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `client_id` or
    ///   `client_secret` was not set
    /// - [`ConfigError::InvalidEndpointUrl`] if an endpoint override is not
    ///   an absolute http(s) URL
    pub fn build(self) -> Result<FantasyConfig, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let auth_url = Self::validated_endpoint(self.auth_url, DEFAULT_AUTH_URL)?;
        let token_url = Self::validated_endpoint(self.token_url, DEFAULT_TOKEN_URL)?;
        let api_url = Self::validated_endpoint(self.api_url, DEFAULT_API_URL)?;

        Ok(FantasyConfig {
            client_id,
            client_secret,
            scopes: self.scopes.unwrap_or_default(),
            host: self.host,
            landing_url: self.landing_url,
            auth_url,
            token_url,
            api_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }

    fn validated_endpoint(
        override_url: Option<String>,
        default: &str,
    ) -> Result<String, ConfigError> {
        match override_url {
            None => Ok(default.to_string()),
            Some(url) => {
                if url.starts_with("https://") || url.starts_with("http://") {
                    Ok(url.trim_end_matches('/').to_string())
                } else {
                    Err(ConfigError::InvalidEndpointUrl { url })
                }
            }
        }
    }
}
