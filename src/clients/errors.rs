//! Error types for authenticated request relay.
//!
//! This module contains the [`RelayError`] type covering every failure mode
//! of an outbound call: missing credentials, rejected credentials, malformed
//! addresses, cancellation, and transport failures.
//!
//! # Error Handling
//!
//! None of these errors are retried internally — a blind retry of a
//! non-idempotent POST (a trade proposal, say) would be unsafe — and none
//! are swallowed: every failure path returns a typed error to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use fantasy_api::clients::RelayError;
//!
//! match relay.get(&session, &address).await {
//!     Ok(response) => { /* hand bytes to the schema layer */ }
//!     Err(RelayError::NotAuthenticated { .. }) => { /* begin a fresh authorization */ }
//!     Err(RelayError::CredentialRejected { .. }) => { /* credential revoked upstream */ }
//!     Err(RelayError::Address(e)) => { /* caller built a malformed address */ }
//!     Err(RelayError::Cancelled) => { /* deadline elapsed */ }
//!     Err(RelayError::Transport(e)) => { /* network failure */ }
//! }
//! ```

use crate::address::AddressError;
use thiserror::Error;

/// Errors that can occur while relaying a request to the remote service.
///
/// # Thread Safety
///
/// `RelayError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No usable credential is stored for the session.
    ///
    /// Either the session never completed an authorization, logged out, or
    /// its credential has lazily expired. No network call is issued; the
    /// caller should trigger a fresh authorization handshake.
    #[error("No usable credential is stored for session '{session}'")]
    NotAuthenticated {
        /// The session the relay was asked to act for.
        session: String,
    },

    /// The remote service rejected the session's credential (401/403).
    ///
    /// The credential was present locally but refused upstream — revoked or
    /// invalidated. The call is not retried; the caller is responsible for
    /// triggering re-authorization.
    #[error("Remote service rejected the session credential with status {status}")]
    CredentialRejected {
        /// The HTTP status the service answered with.
        status: u16,
    },

    /// The address could not be rendered.
    ///
    /// Address errors are caught before any network activity — there is no
    /// partial request.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The caller-supplied deadline elapsed before the call completed.
    ///
    /// Cancellation never leaves the stored credential in an inconsistent
    /// state; the request may or may not have reached the service.
    #[error("The outbound request was cancelled before completion")]
    Cancelled,

    /// Network or transport failure.
    #[error("Network error: {0}")]
    Transport(reqwest::Error),
}

impl RelayError {
    /// Classifies a transport-layer failure, mapping elapsed deadlines to
    /// [`RelayError::Cancelled`].
    #[must_use]
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Cancelled
        } else {
            Self::Transport(error)
        }
    }
}

// Verify RelayError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelayError>();
};
