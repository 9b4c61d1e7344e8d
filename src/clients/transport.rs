//! Authenticated HTTP transport for the Fantasy Sports API.
//!
//! This module provides the [`AuthenticatedTransport`] type: a `reqwest`
//! wrapper that attaches a session credential as a bearer authorization
//! header on each outgoing request.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Credential;
use crate::clients::errors::RelayError;
use crate::clients::request::{HttpMethod, RequestBody};
use crate::clients::response::RemoteResponse;
use crate::config::FantasyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport that authenticates each request with a credential.
///
/// The transport handles:
/// - URL construction against the configured API base
/// - The `Authorization: Bearer` header, applied per request and never
///   persisted into the composed URI
/// - Caller-supplied deadlines, surfaced as
///   [`RelayError::Cancelled`] on expiry
/// - Mapping remote 401/403 answers to [`RelayError::CredentialRejected`]
///
/// It performs no retries and no token refresh: a rejected credential is
/// reported upward and re-authorization is the caller's decision.
///
/// # Thread Safety
///
/// `AuthenticatedTransport` is `Send + Sync`, making it safe to share across
/// async tasks; concurrent sends for independent sessions share no mutable
/// state.
#[derive(Debug)]
pub struct AuthenticatedTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API base URL (e.g. `https://fantasysports.yahooapis.com/fantasy/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify AuthenticatedTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthenticatedTransport>();
};

impl AuthenticatedTransport {
    /// Creates a new transport against the configured API base URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &FantasyConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Fantasy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_url().to_string(),
            default_headers,
        }
    }

    /// Returns the API base URL for this transport.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one authenticated request and returns the raw response.
    ///
    /// The remote body is returned verbatim with its status for any outcome
    /// the service answers — including domain-level error documents — except
    /// 401/403, which surface as `CredentialRejected`.
    ///
    /// # Arguments
    ///
    /// * `credential` - The session credential attached as a bearer header
    /// * `method` - The HTTP verb
    /// * `path` - The composed resource path, relative to the API base
    /// * `body` - The caller-supplied document for mutating verbs
    /// * `deadline` - Optional overall deadline for the call
    ///
    /// # Errors
    ///
    /// - [`RelayError::CredentialRejected`]: the service answered 401 or 403
    /// - [`RelayError::Cancelled`]: the deadline elapsed
    /// - [`RelayError::Transport`]: network-level failure
    pub async fn send(
        &self,
        credential: &Credential,
        method: HttpMethod,
        path: &str,
        body: Option<&RequestBody>,
        deadline: Option<Duration>,
    ) -> Result<RemoteResponse, RelayError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // The credential travels in the authorization header, never the URI
        req_builder = req_builder.bearer_auth(&credential.access_token);

        if let Some(body) = body {
            req_builder = req_builder
                .header("Content-Type", body.data_type.as_content_type())
                .body(body.content.clone());
        }

        if let Some(deadline) = deadline {
            req_builder = req_builder.timeout(deadline);
        }

        let response = req_builder
            .send()
            .await
            .map_err(RelayError::from_transport)?;

        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            tracing::warn!(status, %url, "remote service rejected the session credential");
            return Err(RelayError::CredentialRejected { status });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(RelayError::from_transport)?;

        Ok(RemoteResponse::new(status, content_type, bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret};

    fn create_test_config() -> FantasyConfig {
        FantasyConfig::builder()
            .client_id(ClientId::new("test-key").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_transport_uses_configured_base_url() {
        let config = create_test_config();
        let transport = AuthenticatedTransport::new(&config);

        assert_eq!(
            transport.base_url(),
            "https://fantasysports.yahooapis.com/fantasy/v2"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let transport = AuthenticatedTransport::new(&config);

        let user_agent = transport.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Fantasy API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = FantasyConfig::builder()
            .client_id(ClientId::new("key").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let transport = AuthenticatedTransport::new(&config);

        let user_agent = transport.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Fantasy API Library"));
    }

    #[test]
    fn test_no_authorization_in_default_headers() {
        let config = create_test_config();
        let transport = AuthenticatedTransport::new(&config);

        // The bearer header is attached per request, never stored
        assert!(transport.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthenticatedTransport>();
    }
}
