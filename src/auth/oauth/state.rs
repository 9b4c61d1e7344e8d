//! State parameter handling for OAuth CSRF protection.
//!
//! This module provides the [`StateParam`] type for generating OAuth state
//! parameters, and the constant-time comparison used to verify the value
//! echoed back by the consent page.
//!
//! # Overview
//!
//! The state parameter prevents cross-site request forgery: the value stored
//! in the session at redirect time must match the value the service echoes to
//! the callback, or the callback is rejected before any token exchange.
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.as_ref().len(), 15);
//! assert!(state.matches(state.as_ref()));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// OAuth anti-forgery state parameter.
///
/// A cryptographically random nonce generated at the start of the
/// authorization handshake and verified, in constant time, when the callback
/// arrives.
///
/// # Thread Safety
///
/// `StateParam` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// The length of generated nonces.
    const NONCE_LENGTH: usize = 15;

    /// Creates a new state parameter with a cryptographically secure random
    /// alphanumeric nonce.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fantasy_api::auth::oauth::StateParam;
    ///
    /// let state = StateParam::new();
    /// assert_eq!(state.as_ref().len(), 15);
    /// assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self(nonce)
    }

    /// Creates a state parameter from a raw string.
    ///
    /// This allows callers that persist the state externally (e.g. in a
    /// cookie-backed session) to rebuild the value as-is.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compares this state against an echoed value in constant time.
    #[must_use]
    pub fn matches(&self, echoed: &str) -> bool {
        constant_time_compare(&self.0, echoed)
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compares two strings in constant time to prevent timing attacks.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_15_char_alphanumeric_nonce() {
        let state = StateParam::new();

        assert_eq!(state.as_ref().len(), 15);
        assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_generates_unique_nonces() {
        let state1 = StateParam::new();
        let state2 = StateParam::new();

        // Extremely unlikely to generate the same nonce twice
        assert_ne!(state1.as_ref(), state2.as_ref());
    }

    #[test]
    fn test_from_raw_wraps_string_correctly() {
        let state = StateParam::from_raw("custom-state-123");
        assert_eq!(state.as_ref(), "custom-state-123");
    }

    #[test]
    fn test_matches_accepts_equal_value() {
        let state = StateParam::from_raw("expected");
        assert!(state.matches("expected"));
    }

    #[test]
    fn test_matches_rejects_different_value() {
        let state = StateParam::from_raw("expected");
        assert!(!state.matches("expecteD"));
        assert!(!state.matches("expected2"));
        assert!(!state.matches(""));
    }

    #[test]
    fn test_constant_time_compare_handles_length_mismatch() {
        assert!(!constant_time_compare("short", "a-much-longer-value"));
        assert!(constant_time_compare("same", "same"));
    }

    #[test]
    fn test_display_returns_state_string() {
        let state = StateParam::from_raw("display-test");
        assert_eq!(format!("{state}"), "display-test");
    }

    #[test]
    fn test_serde_round_trip() {
        let state = StateParam::from_raw("abc123");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"abc123\"");

        let back: StateParam = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_state_param_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StateParam>();
    }
}
