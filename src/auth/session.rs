//! Typed session state for the authorization handshake.
//!
//! This module provides the [`Session`] type, a statically typed record of
//! per-client handshake state, and the [`AuthState`] machine derived from it.
//!
//! A session correlates a browser or API client with a stored
//! [`Credential`](crate::auth::Credential) and the transient anti-forgery
//! `state` used while consent is pending. Storing these as named, typed
//! fields (rather than an arbitrary-key value map) removes the need for
//! runtime casts when they are read back.

use crate::auth::oauth::StateParam;
use crate::auth::store::CredentialStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier correlating a client with its stored credential.
///
/// # Example
///
/// ```rust
/// use fantasy_api::SessionId;
///
/// let id = SessionId::new("session-123");
/// assert_eq!(id.as_ref(), "session-123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session identifier from an opaque string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authorization state of a session.
///
/// The handshake progresses `Unauthenticated → PendingConsent →
/// Authenticated`; failed exchanges fall back rather than leaving a session
/// half-authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// No handshake in progress and no stored credential.
    Unauthenticated,
    /// A consent redirect was issued; the anti-forgery state is held.
    PendingConsent,
    /// A usable credential is stored for this session.
    Authenticated,
}

/// Per-client session record.
///
/// Created on first contact by the caller's session layer, populated with the
/// anti-forgery `state` by
/// [`begin_authorization`](crate::auth::oauth::begin_authorization), and with
/// the service identity token by
/// [`complete_authorization`](crate::auth::oauth::complete_authorization).
/// The credential itself lives in a
/// [`CredentialStore`](crate::auth::CredentialStore), keyed by this session's
/// ID.
///
/// # Example
///
/// ```rust
/// use fantasy_api::{MemoryCredentialStore, Session, SessionId};
/// use fantasy_api::auth::AuthState;
///
/// let store = MemoryCredentialStore::new();
/// let session = Session::new(SessionId::new("abc"));
/// assert_eq!(session.auth_state(&store), AuthState::Unauthenticated);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    state: Option<StateParam>,
    guid: Option<String>,
}

impl Session {
    /// Creates a fresh session with no handshake state.
    #[must_use]
    pub const fn new(id: SessionId) -> Self {
        Self {
            id,
            state: None,
            guid: None,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the pending anti-forgery state, if a consent redirect was issued.
    #[must_use]
    pub const fn state(&self) -> Option<&StateParam> {
        self.state.as_ref()
    }

    /// Returns the service identity token recorded at callback time.
    #[must_use]
    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    /// Derives the authorization state of this session.
    ///
    /// A session is `Authenticated` when the store holds a usable (present
    /// and unexpired) credential for it; `PendingConsent` when an
    /// anti-forgery state is held; `Unauthenticated` otherwise.
    #[must_use]
    pub fn auth_state(&self, store: &dyn CredentialStore) -> AuthState {
        if store.get(&self.id).is_some_and(|c| c.is_usable()) {
            return AuthState::Authenticated;
        }
        if self.state.is_some() {
            return AuthState::PendingConsent;
        }
        AuthState::Unauthenticated
    }

    /// Logs the session out: drops the stored credential and all transient
    /// handshake state.
    pub fn logout(&mut self, store: &dyn CredentialStore) {
        store.clear(&self.id);
        self.state = None;
        self.guid = None;
    }

    pub(crate) fn set_state(&mut self, state: StateParam) {
        self.state = Some(state);
    }

    /// Consumes the pending state. The anti-forgery value is single-use; a
    /// failed exchange requires a fresh `begin_authorization`.
    pub(crate) fn take_state(&mut self) -> Option<StateParam> {
        self.state.take()
    }

    pub(crate) fn set_guid(&mut self, guid: Option<String>) {
        self.guid = guid;
    }
}

// Verify session types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionId>();
    assert_send_sync::<Session>();
    assert_send_sync::<AuthState>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryCredentialStore;
    use crate::auth::Credential;

    #[test]
    fn test_fresh_session_is_unauthenticated() {
        let store = MemoryCredentialStore::new();
        let session = Session::new(SessionId::new("s1"));

        assert_eq!(session.auth_state(&store), AuthState::Unauthenticated);
    }

    #[test]
    fn test_session_with_state_is_pending_consent() {
        let store = MemoryCredentialStore::new();
        let mut session = Session::new(SessionId::new("s1"));
        session.set_state(StateParam::new());

        assert_eq!(session.auth_state(&store), AuthState::PendingConsent);
    }

    #[test]
    fn test_session_with_stored_credential_is_authenticated() {
        let store = MemoryCredentialStore::new();
        let session = Session::new(SessionId::new("s1"));
        store.put(
            session.id().clone(),
            Credential::new("token".to_string(), None, None),
        );

        assert_eq!(session.auth_state(&store), AuthState::Authenticated);
    }

    #[test]
    fn test_expired_credential_reads_as_unauthenticated() {
        let store = MemoryCredentialStore::new();
        let session = Session::new(SessionId::new("s1"));
        store.put(
            session.id().clone(),
            Credential::new(
                "token".to_string(),
                None,
                Some(chrono::Utc::now() - chrono::Duration::hours(1)),
            ),
        );

        assert_eq!(session.auth_state(&store), AuthState::Unauthenticated);
    }

    #[test]
    fn test_logout_clears_credential_and_handshake_state() {
        let store = MemoryCredentialStore::new();
        let mut session = Session::new(SessionId::new("s1"));
        session.set_state(StateParam::new());
        session.set_guid(Some("GUID".to_string()));
        store.put(
            session.id().clone(),
            Credential::new("token".to_string(), None, None),
        );

        session.logout(&store);

        assert_eq!(session.auth_state(&store), AuthState::Unauthenticated);
        assert!(session.state().is_none());
        assert!(session.guid().is_none());
        assert!(store.get(session.id()).is_none());
    }

    #[test]
    fn test_take_state_is_single_use() {
        let mut session = Session::new(SessionId::new("s1"));
        session.set_state(StateParam::new());

        assert!(session.take_state().is_some());
        assert!(session.take_state().is_none());
    }
}
