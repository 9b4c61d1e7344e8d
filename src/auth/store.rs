//! Credential persistence keyed by session.
//!
//! This module provides the [`CredentialStore`] contract and the built-in
//! [`MemoryCredentialStore`] implementation.
//!
//! # Consistency
//!
//! Stores must be transactional per session: a concurrent reader observes
//! either the old or the new credential of a `put`, never a partial write.
//! Reads for different sessions must not contend with each other.

use crate::auth::credential::Credential;
use crate::auth::session::SessionId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Persistence contract for per-session delegated-access credentials.
///
/// Implementations hold at most one credential per session. `get` returns
/// `None` for sessions that have never authorized or have logged out; expiry
/// is not this trait's concern — callers check it lazily on the returned
/// credential.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the relay and the authorization
/// flow call them concurrently from independent request tasks.
pub trait CredentialStore: Send + Sync {
    /// Fetches the credential stored for a session, if any.
    fn get(&self, session: &SessionId) -> Option<Credential>;

    /// Stores a credential for a session, atomically replacing any prior one.
    fn put(&self, session: SessionId, credential: Credential);

    /// Removes the credential stored for a session.
    fn clear(&self, session: &SessionId);
}

/// In-memory, process-local credential store.
///
/// Backed by an `RwLock`-guarded map: concurrent `get` calls for different
/// sessions proceed in parallel, while `put`/`clear` serialize against reads
/// so a session always observes a complete credential.
///
/// # Example
///
/// ```rust
/// use fantasy_api::{Credential, CredentialStore, MemoryCredentialStore, SessionId};
///
/// let store = MemoryCredentialStore::new();
/// let session = SessionId::new("s1");
///
/// store.put(session.clone(), Credential::new("token".to_string(), None, None));
/// assert!(store.get(&session).is_some());
///
/// store.clear(&session);
/// assert!(store.get(&session).is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: RwLock<HashMap<SessionId, Credential>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, session: &SessionId) -> Option<Credential> {
        self.credentials
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(session)
            .cloned()
    }

    fn put(&self, session: SessionId, credential: Credential) {
        self.credentials
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(session, credential);
    }

    fn clear(&self, session: &SessionId) {
        self.credentials
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(session);
    }
}

// Verify MemoryCredentialStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MemoryCredentialStore>();
};
