//! Authenticated request relay.
//!
//! This module provides [`RequestRelay`], the orchestration layer that turns
//! a [`ResourceAddress`] plus a session into one outbound call: compose the
//! path, resolve the session's credential, dispatch through the
//! [`AuthenticatedTransport`], and hand back the raw response.
//!
//! The relay holds no state across calls and never retries.

use std::sync::Arc;
use std::time::Duration;

use crate::address::ResourceAddress;
use crate::auth::{CredentialStore, Session};
use crate::clients::errors::RelayError;
use crate::clients::request::{HttpMethod, RequestBody};
use crate::clients::response::RemoteResponse;
use crate::clients::transport::AuthenticatedTransport;
use crate::config::FantasyConfig;

/// Relays structured resource requests to the remote service.
///
/// Each call:
///
/// 1. composes the address — address errors fail fast, before any network
///    activity
/// 2. resolves the session's credential from the store — a missing or
///    lazily-expired credential is [`RelayError::NotAuthenticated`] and no
///    network call is issued
/// 3. dispatches the verb through the authenticated transport and returns
///    the remote body verbatim for the schema layer to decode
///
/// For mutating verbs the caller-supplied body document passes through
/// unmodified; domain-specific legality (whether a trade is still pending,
/// say) is the service's to judge, and its error responses come back as
/// ordinary [`RemoteResponse`] values.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use fantasy_api::{FantasyConfig, MemoryCredentialStore, RequestRelay};
/// use fantasy_api::address::{ResourceAddress, ResourceKind};
///
/// let store = Arc::new(MemoryCredentialStore::new());
/// let relay = RequestRelay::new(&config, store);
///
/// let address = ResourceAddress::resource(ResourceKind::League, "223.l.431")
///     .sub(ResourceAddress::collection(ResourceKind::Standings));
///
/// let response = relay.get(&session, &address).await?;
/// // response.body holds the raw standings document
/// ```
pub struct RequestRelay {
    transport: AuthenticatedTransport,
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for RequestRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestRelay")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl RequestRelay {
    /// Creates a relay over the configured API base and credential store.
    #[must_use]
    pub fn new(config: &FantasyConfig, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            transport: AuthenticatedTransport::new(config),
            store,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &AuthenticatedTransport {
        &self.transport
    }

    /// Issues an authenticated GET for the addressed resource.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(
        &self,
        session: &Session,
        address: &ResourceAddress,
    ) -> Result<RemoteResponse, RelayError> {
        self.execute(session, address, HttpMethod::Get, None, None)
            .await
    }

    /// Issues an authenticated PUT carrying the supplied document.
    ///
    /// Covers waiver edits (priority/FAAB bid), trade answers
    /// (accept/reject/allow/disallow/vote), and roster edits.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put(
        &self,
        session: &Session,
        address: &ResourceAddress,
        body: RequestBody,
    ) -> Result<RemoteResponse, RelayError> {
        self.execute(session, address, HttpMethod::Put, Some(body), None)
            .await
    }

    /// Issues an authenticated POST carrying the supplied document.
    ///
    /// Covers transaction creation: add/drop and trade proposals.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(
        &self,
        session: &Session,
        address: &ResourceAddress,
        body: RequestBody,
    ) -> Result<RemoteResponse, RelayError> {
        self.execute(session, address, HttpMethod::Post, Some(body), None)
            .await
    }

    /// Issues an authenticated DELETE, optionally carrying a document.
    ///
    /// Covers cancellation of pending waivers and proposed trades.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(
        &self,
        session: &Session,
        address: &ResourceAddress,
        body: Option<RequestBody>,
    ) -> Result<RemoteResponse, RelayError> {
        self.execute(session, address, HttpMethod::Delete, body, None)
            .await
    }

    /// Executes one relay call.
    ///
    /// The general entry point behind the verb helpers; `deadline` bounds the
    /// outbound call and surfaces as [`RelayError::Cancelled`] on expiry.
    ///
    /// # Errors
    ///
    /// - [`RelayError::Address`]: the address could not be rendered (no
    ///   network call is made)
    /// - [`RelayError::NotAuthenticated`]: no usable credential for the
    ///   session (no network call is made)
    /// - [`RelayError::CredentialRejected`]: the service answered 401/403
    /// - [`RelayError::Cancelled`]: the deadline elapsed
    /// - [`RelayError::Transport`]: network failure
    pub async fn execute(
        &self,
        session: &Session,
        address: &ResourceAddress,
        method: HttpMethod,
        body: Option<RequestBody>,
        deadline: Option<Duration>,
    ) -> Result<RemoteResponse, RelayError> {
        // Compose before touching the store or the network
        let path = address.compose()?;

        let credential = self
            .store
            .get(session.id())
            .filter(crate::auth::Credential::is_usable)
            .ok_or_else(|| RelayError::NotAuthenticated {
                session: session.id().to_string(),
            })?;

        tracing::debug!(session = %session.id(), %method, %path, "relaying request");

        self.transport
            .send(&credential, method, &path, body.as_ref(), deadline)
            .await
    }
}

// Verify RequestRelay is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestRelay>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ResourceKind;
    use crate::auth::{MemoryCredentialStore, SessionId};
    use crate::config::{ClientId, ClientSecret};

    fn create_test_config() -> FantasyConfig {
        FantasyConfig::builder()
            .client_id(ClientId::new("test-key").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_without_credential_is_not_authenticated() {
        let relay = RequestRelay::new(
            &create_test_config(),
            Arc::new(MemoryCredentialStore::new()),
        );
        let session = Session::new(SessionId::new("anon"));
        let address = ResourceAddress::collection(ResourceKind::Game);

        let result = relay.get(&session, &address).await;

        match result {
            Err(RelayError::NotAuthenticated { session }) => assert_eq!(session, "anon"),
            other => panic!("expected NotAuthenticated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_address_before_credential_lookup() {
        let relay = RequestRelay::new(
            &create_test_config(),
            Arc::new(MemoryCredentialStore::new()),
        );
        let session = Session::new(SessionId::new("anon"));
        let address = ResourceAddress::resource(ResourceKind::League, "223.l.431").out(
            ResourceAddress::collection(ResourceKind::Team)
                .sub(ResourceAddress::collection(ResourceKind::Roster)),
        );

        let result = relay.get(&session, &address).await;

        // Address errors win over NotAuthenticated: composition happens first
        assert!(matches!(result, Err(RelayError::Address(_))));
    }

    #[tokio::test]
    async fn test_expired_credential_is_treated_as_missing() {
        let store = Arc::new(MemoryCredentialStore::new());
        let session = Session::new(SessionId::new("stale"));
        store.put(
            session.id().clone(),
            crate::auth::Credential::new(
                "token".to_string(),
                None,
                Some(chrono::Utc::now() - chrono::Duration::hours(1)),
            ),
        );
        let relay = RequestRelay::new(&create_test_config(), store);
        let address = ResourceAddress::collection(ResourceKind::Game);

        let result = relay.get(&session, &address).await;

        assert!(matches!(result, Err(RelayError::NotAuthenticated { .. })));
    }

    #[test]
    fn test_relay_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestRelay>();
    }
}
