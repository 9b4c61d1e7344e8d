//! Delegated-access credentials for Fantasy Sports API calls.
//!
//! This module provides the [`Credential`] type representing the token
//! obtained from a completed authorization handshake, and the raw
//! [`AccessTokenResponse`] returned by the token endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A delegated-access credential for one authenticated user.
///
/// Credentials are produced by a successful authorization handshake and
/// persisted in a [`CredentialStore`](crate::auth::CredentialStore), one per
/// session. The access token authorizes requests on the user's behalf; the
/// optional refresh token is retained for callers that layer refresh on top,
/// but this SDK never refreshes implicitly — an expired credential simply
/// forces re-authorization.
///
/// # Security
///
/// The `Debug` implementation masks the token values.
///
/// # Example
///
/// ```rust
/// use fantasy_api::Credential;
///
/// let credential = Credential::new("access-token".to_string(), None, None);
/// assert!(!credential.expired());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The bearer access token.
    pub access_token: String,

    /// The refresh token, if the token endpoint issued one.
    pub refresh_token: Option<String>,

    /// When the access token expires, if known.
    pub expires: Option<DateTime<Utc>>,
}

impl Credential {
    /// Creates a new credential.
    #[must_use]
    pub const fn new(
        access_token: String,
        refresh_token: Option<String>,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires,
        }
    }

    /// Builds a credential from a token-endpoint response.
    ///
    /// The expiry instant is computed from the response's relative
    /// `expires_in` seconds at the moment of the call.
    #[must_use]
    pub fn from_token_response(response: &AccessTokenResponse) -> Self {
        let expires = response
            .expires_in
            .map(|seconds| Utc::now() + Duration::seconds(seconds));

        Self {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires,
        }
    }

    /// Returns `true` if this credential has expired.
    ///
    /// Credentials without a known expiry are considered never expired.
    /// Expiry is checked lazily at relay time; an expired credential is
    /// treated the same as a missing one.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this credential can authorize a request
    /// (non-empty token and not expired).
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"*****")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("expires", &self.expires)
            .finish()
    }
}

/// Raw response from the token endpoint.
///
/// Mirrors the JSON document returned by the `get_token` exchange. The
/// `xoauth_yahoo_guid` field is the service-specific identity token that
/// accompanies the credential.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer access token.
    pub access_token: String,

    /// The token type (always `bearer` for this service).
    #[serde(default)]
    pub token_type: Option<String>,

    /// Relative lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,

    /// The refresh token, if issued.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Service-specific identity token for the authorizing user.
    #[serde(default)]
    pub xoauth_yahoo_guid: Option<String>,
}

// Verify Credential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credential>();
    assert_send_sync::<AccessTokenResponse>();
};
