//! Consent-page URL generation.
//!
//! This module provides the [`begin_authorization`] function, the first step
//! of the three-legged handshake, and the [`BeginAuthResult`] struct
//! containing the consent URL and the generated state parameter.
//!
//! # Overview
//!
//! `begin_authorization`:
//! 1. Generates a cryptographically secure state parameter for CSRF protection
//!    and stores it in the session (`Unauthenticated → PendingConsent`)
//! 2. Builds the consent-page URL the end user must be redirected to
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl, Session, SessionId};
//! use fantasy_api::auth::oauth::begin_authorization;
//!
//! let config = FantasyConfig::builder()
//!     .client_id(ClientId::new("my-consumer-key").unwrap())
//!     .client_secret(ClientSecret::new("my-consumer-secret").unwrap())
//!     .host(HostUrl::new("https://myapp.example.com").unwrap())
//!     .scopes("fspt-w".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut session = Session::new(SessionId::new("abc"));
//! let result = begin_authorization(&config, &mut session, "/auth/callback").unwrap();
//!
//! // Redirect the end user to result.auth_url; the state is now held in the
//! // session for verification when the callback arrives.
//! assert!(result.auth_url.contains("response_type=code"));
//! assert_eq!(session.state(), Some(&result.state));
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::session::Session;
use crate::config::FantasyConfig;

/// Result of initiating the authorization handshake.
///
/// Contains the consent-page URL to redirect the end user to and the state
/// parameter that was stored in the session. The state is echoed back by the
/// service and verified by
/// [`complete_authorization`](crate::auth::oauth::complete_authorization);
/// a mismatch aborts the handshake.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The full consent-page URL to redirect the end user to.
    pub auth_url: String,

    /// The anti-forgery state generated for this handshake.
    ///
    /// Already stored in the session; returned for callers that persist
    /// session state externally.
    pub state: StateParam,
}

/// Initiates the three-legged authorization handshake.
///
/// Generates the anti-forgery state, records it in the session, and builds
/// the consent-page URL parameterized by client identity, requested scopes,
/// and the callback location. The session transitions to `PendingConsent`.
///
/// # Arguments
///
/// * `config` - SDK configuration (must have `host` configured)
/// * `session` - The session the handshake belongs to
/// * `redirect_path` - Path on the application that receives the callback
///   (e.g., "/auth/callback")
///
/// # Returns
///
/// A [`BeginAuthResult`] with the consent URL and the stored state.
///
/// # Errors
///
/// Returns [`OAuthError::MissingHostConfig`] if `config.host()` is `None`.
///
/// # Example
///
/// ```rust
/// use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl, Session, SessionId};
/// use fantasy_api::auth::oauth::begin_authorization;
///
/// let config = FantasyConfig::builder()
///     .client_id(ClientId::new("key").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .host(HostUrl::new("https://myapp.example.com").unwrap())
///     .scopes("fspt-r".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let mut session = Session::new(SessionId::new("abc"));
/// let result = begin_authorization(&config, &mut session, "/auth/callback").unwrap();
/// assert!(result.auth_url.starts_with("https://api.login.yahoo.com/oauth2/request_auth?"));
/// assert!(result.auth_url.contains("client_id=key"));
/// ```
pub fn begin_authorization(
    config: &FantasyConfig,
    session: &mut Session,
    redirect_path: &str,
) -> Result<BeginAuthResult, OAuthError> {
    // The redirect URI requires a configured application host
    let host = config.host().ok_or(OAuthError::MissingHostConfig)?;

    let state = StateParam::new();
    let redirect_uri = format!("{}{}", host.as_ref(), redirect_path);

    let mut params = vec![
        ("client_id", config.client_id().as_ref().to_string()),
        ("redirect_uri", redirect_uri),
        ("response_type", "code".to_string()),
        ("state", state.to_string()),
    ];

    if !config.scopes().is_empty() {
        params.push(("scope", config.scopes().to_string()));
    }

    // Build query string with proper URL encoding for both keys and values
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!("{}?{}", config.auth_url(), query_string);

    tracing::debug!(session = %session.id(), "built consent redirect");
    session.set_state(state.clone());

    Ok(BeginAuthResult { auth_url, state })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
