//! OAuth-specific error types for the Fantasy Sports API SDK.
//!
//! This module contains error types for the authorization handshake: state
//! verification and token exchange failures.
//!
//! # Error Types
//!
//! - [`OAuthError::StateMismatch`]: anti-forgery check failed during callback
//! - [`OAuthError::ExchangeFailed`]: token exchange rejected or network-failed
//! - [`OAuthError::InvalidCallback`]: callback parameters are malformed
//! - [`OAuthError::MissingHostConfig`]: host URL not configured for the redirect URI
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur during the authorization handshake.
///
/// Every variant leaves the session in a well-defined prior state: a
/// `StateMismatch` keeps the pending handshake intact, while an
/// `ExchangeFailed` consumes the single-use state so the caller must begin a
/// fresh authorization. None of these failures are process-fatal.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// Anti-forgery state parameter mismatch.
    ///
    /// The `state` echoed by the consent page does not match the value stored
    /// when the handshake began (possible forgery, or a stale session with no
    /// pending handshake). The token exchange is never attempted when this
    /// check fails.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state stored in the session (empty if none was pending).
        expected: String,
        /// The state received in the callback.
        received: String,
    },

    /// Token exchange with the remote service failed.
    ///
    /// The server-to-server request to trade the authorization code for a
    /// credential was rejected or could not be completed. A status of `0`
    /// indicates a network-level failure before any response was received.
    #[error("Token exchange failed with status {status}: {message}")]
    ExchangeFailed {
        /// The HTTP status returned by the token endpoint (0 for network errors).
        status: u16,
        /// The error message from the response or transport.
        message: String,
    },

    /// Callback parameters are invalid or malformed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// Host URL is not configured in [`FantasyConfig`](crate::FantasyConfig).
    ///
    /// `begin_authorization` needs the application host to construct the
    /// redirect URI. Configure it via `FantasyConfigBuilder::host()`.
    #[error("Host URL must be configured in FantasyConfig for authorization")]
    MissingHostConfig,
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_mismatch_includes_expected_and_received() {
        let error = OAuthError::StateMismatch {
            expected: "abc123".to_string(),
            received: "xyz789".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("abc123"));
        assert!(message.contains("xyz789"));
        assert!(message.contains("expected"));
        assert!(message.contains("received"));
    }

    #[test]
    fn test_exchange_failed_includes_status_and_message() {
        let error = OAuthError::ExchangeFailed {
            status: 401,
            message: "invalid client credentials".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid client credentials"));
    }

    #[test]
    fn test_invalid_callback_includes_reason() {
        let error = OAuthError::InvalidCallback {
            reason: "missing authorization code".to_string(),
        };
        assert!(error.to_string().contains("missing authorization code"));
    }

    #[test]
    fn test_missing_host_config_message() {
        let error = OAuthError::MissingHostConfig;
        assert!(error.to_string().contains("Host URL"));
        assert!(error.to_string().contains("configured"));
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::MissingHostConfig;
        let _ = error;
    }

    #[test]
    fn test_oauth_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OAuthError>();
    }
}
