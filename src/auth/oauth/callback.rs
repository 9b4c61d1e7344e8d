//! Callback validation and token exchange.
//!
//! This module provides the [`complete_authorization`] function for the third
//! leg of the handshake: validating the callback from the consent page and
//! exchanging the authorization code for a delegated-access credential.
//!
//! # Overview
//!
//! After the end user grants access, the service redirects them to the
//! application's callback URL with query parameters. This function:
//!
//! 1. Verifies the echoed `state` against the session's stored value using a
//!    constant-time comparison — mandatory; on mismatch the token exchange is
//!    never attempted
//! 2. Consumes the stored state (single-use; a failed exchange requires a
//!    fresh [`begin_authorization`](crate::auth::oauth::begin_authorization))
//! 3. Exchanges the authorization code for a credential via a
//!    server-to-server token request
//! 4. Stores the credential atomically in the [`CredentialStore`] and records
//!    the service identity token on the session
//!
//! Every failure is returned as a typed [`OAuthError`]; a rejected exchange
//! is recoverable per-request, never fatal.

use crate::auth::credential::{AccessTokenResponse, Credential};
use crate::auth::oauth::error::OAuthError;
use crate::auth::session::Session;
use crate::auth::store::CredentialStore;
use crate::config::FantasyConfig;

/// Query parameters received on the OAuth callback path.
///
/// The consent page redirects back with the authorization `code`, the echoed
/// anti-forgery `state`, and a service-specific identity token for the
/// authorizing user.
///
/// # Example
///
/// ```rust
/// use fantasy_api::auth::oauth::CallbackQuery;
///
/// let query = CallbackQuery::new("auth-code", "echoed-state")
///     .with_guid("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
/// assert_eq!(query.code, "auth-code");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    /// The authorization code to exchange for a credential.
    pub code: String,
    /// The anti-forgery state echoed by the service.
    pub state: String,
    /// The service identity token (`xoauth_yahoo_guid`), if present.
    pub guid: Option<String>,
}

impl CallbackQuery {
    /// Creates a callback query from the code and echoed state.
    #[must_use]
    pub fn new(code: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            state: state.into(),
            guid: None,
        }
    }

    /// Attaches the service identity token from the callback.
    #[must_use]
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }
}

/// Request body for the authorization-code token exchange.
#[derive(serde::Serialize)]
struct TokenExchangeRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
}

/// Completes the authorization handshake for a session.
///
/// Performs the full callback validation flow:
///
/// 1. **State verification**: the echoed `state` is compared against the
///    session's stored value in constant time. On mismatch the function
///    fails with [`OAuthError::StateMismatch`] and the token exchange is
///    never attempted; the pending handshake is left intact so a legitimate
///    callback can still complete it.
/// 2. **State consumption**: on match, the stored state is consumed. It is
///    single-use — if the exchange below fails, the caller must begin a
///    fresh authorization rather than replay the code.
/// 3. **Token exchange**: the authorization code is POSTed to the token
///    endpoint along with the client identity and redirect URI.
/// 4. **Persistence**: the resulting credential is stored atomically, one
///    per session, replacing any prior credential; the service identity
///    token is recorded on the session.
///
/// The session transitions `PendingConsent → Authenticated` on success and
/// back to `Unauthenticated` on exchange failure.
///
/// # Arguments
///
/// * `config` - SDK configuration (must have `host` configured)
/// * `store` - Credential store the new credential is persisted in
/// * `session` - The session the handshake belongs to
/// * `callback` - Query parameters received on the callback path
/// * `redirect_path` - The same redirect path passed to `begin_authorization`
///
/// # Returns
///
/// The stored [`Credential`].
///
/// # Errors
///
/// - [`OAuthError::StateMismatch`]: the echoed state does not match (or the
///   session has no pending handshake)
/// - [`OAuthError::InvalidCallback`]: the callback carries no authorization code
/// - [`OAuthError::MissingHostConfig`]: no host configured for the redirect URI
/// - [`OAuthError::ExchangeFailed`]: the token endpoint rejected the exchange
///   or could not be reached
///
/// # Example
///
/// ```rust,ignore
/// use fantasy_api::auth::oauth::{complete_authorization, CallbackQuery};
///
/// let callback = CallbackQuery::new(code_param, state_param).with_guid(guid_param);
/// let credential =
///     complete_authorization(&config, &store, &mut session, &callback, "/auth/callback")
///         .await?;
/// // Redirect the end user to config.landing_url()
/// ```
pub async fn complete_authorization(
    config: &FantasyConfig,
    store: &dyn CredentialStore,
    session: &mut Session,
    callback: &CallbackQuery,
    redirect_path: &str,
) -> Result<Credential, OAuthError> {
    // Step 1: Verify the echoed state (constant-time comparison). A mismatch
    // leaves the pending handshake intact.
    let matches = session
        .state()
        .is_some_and(|stored| stored.matches(&callback.state));
    if !matches {
        return Err(OAuthError::StateMismatch {
            expected: session.state().map(ToString::to_string).unwrap_or_default(),
            received: callback.state.clone(),
        });
    }

    if callback.code.is_empty() {
        return Err(OAuthError::InvalidCallback {
            reason: "callback carries no authorization code".to_string(),
        });
    }

    let host = config.host().ok_or(OAuthError::MissingHostConfig)?;
    let redirect_uri = format!("{}{}", host.as_ref(), redirect_path);

    // Step 2: Consume the single-use state before going to the network.
    session.take_state();

    // Step 3: Exchange the authorization code for a credential.
    let request_body = TokenExchangeRequest {
        grant_type: "authorization_code",
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        redirect_uri: &redirect_uri,
        code: &callback.code,
    };

    let client = reqwest::Client::new();
    let response = client
        .post(config.token_url())
        .form(&request_body)
        .send()
        .await
        .map_err(|e| OAuthError::ExchangeFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(OAuthError::ExchangeFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse =
        response
            .json()
            .await
            .map_err(|e| OAuthError::ExchangeFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

    // Step 4: Persist the credential and record the identity token.
    let credential = Credential::from_token_response(&token_response);
    store.put(session.id().clone(), credential.clone());
    session.set_guid(token_response.xoauth_yahoo_guid.or_else(|| callback.guid.clone()));

    tracing::debug!(session = %session.id(), "authorization handshake completed");

    Ok(credential)
}

// Verify CallbackQuery is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CallbackQuery>();
};
