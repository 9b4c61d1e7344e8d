//! # Fantasy Sports API Rust SDK
//!
//! A Rust SDK for the Yahoo Fantasy Sports API, providing type-safe
//! configuration, the three-legged authorization handshake, hierarchical
//! resource addressing, and an authenticated request relay.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FantasyConfig`] and [`FantasyConfigBuilder`]
//! - Validated newtypes for OAuth client credentials and host values
//! - The authorization-code handshake via [`auth::oauth`], with mandatory
//!   anti-forgery state verification
//! - Per-session credential persistence via [`CredentialStore`]
//! - A recursive [`address::ResourceAddress`] model of the service's nested
//!   resource/collection space, composed to path syntax by a pure function
//! - An async [`RequestRelay`] that attaches the session credential per
//!   request and hands back raw response bytes for the schema layer to decode
//! - Typed XML input documents for the mutation endpoints via [`documents`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl};
//!
//! // Create configuration using the builder pattern
//! let config = FantasyConfig::builder()
//!     .client_id(ClientId::new("your-consumer-key").unwrap())
//!     .client_secret(ClientSecret::new("your-consumer-secret").unwrap())
//!     .host(HostUrl::new("https://your-app.com").unwrap())
//!     .scopes("fspt-w".parse().unwrap())
//!     .landing_url("/dashboard")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authorization
//!
//! The handshake is driven from two HTTP handlers on the consuming
//! application — one that starts it, one that receives the callback:
//!
//! ```rust,ignore
//! use fantasy_api::auth::oauth::{begin_authorization, complete_authorization, CallbackQuery};
//! use fantasy_api::{MemoryCredentialStore, Session, SessionId};
//!
//! let store = MemoryCredentialStore::new();
//!
//! // In the auth route: redirect the user to the consent page
//! let mut session = Session::new(SessionId::new(browser_session_id));
//! let begin = begin_authorization(&config, &mut session, "/auth/callback")?;
//! // redirect(begin.auth_url)
//!
//! // In the callback route: verify state, exchange the code, store the credential
//! let callback = CallbackQuery::new(code, state).with_guid(guid);
//! complete_authorization(&config, &store, &mut session, &callback, "/auth/callback").await?;
//! // redirect(config.landing_url())
//! ```
//!
//! ## Addressing Resources
//!
//! Positions in the service's nested resource space are values:
//!
//! ```rust
//! use fantasy_api::address::{ResourceAddress, ResourceKind};
//!
//! let address = ResourceAddress::resource(ResourceKind::Team, "223.l.431.t.1")
//!     .sub(ResourceAddress::collection(ResourceKind::Roster).filter("week", "10"));
//!
//! assert_eq!(address.compose().unwrap(), "team/223.l.431.t.1/roster;week=10");
//! ```
//!
//! ## Relaying Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fantasy_api::{MemoryCredentialStore, RequestRelay};
//! use fantasy_api::address::{ResourceAddress, ResourceKind};
//! use fantasy_api::documents::TransactionDocument;
//!
//! let store = Arc::new(MemoryCredentialStore::new());
//! let relay = RequestRelay::new(&config, Arc::clone(&store));
//!
//! // Read: the raw body goes to the schema layer
//! let standings = ResourceAddress::resource(ResourceKind::League, "223.l.431")
//!     .sub(ResourceAddress::collection(ResourceKind::Standings));
//! let response = relay.get(&session, &standings).await?;
//!
//! // Mutate: the caller's document passes through unmodified
//! let waiver = ResourceAddress::resource(ResourceKind::Transaction, "248.l.55438.w.c.2_6093");
//! let body = TransactionDocument::edit_waiver("248.l.55438.w.c.2_6093", Some(1), Some(20))
//!     .to_body()?;
//! relay.put(&session, &waiver, body).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction; address
//!   errors are caught before any network call
//! - **Typed session state**: Named fields instead of a loosely-typed value
//!   map, so nothing is cast at read time
//! - **Recoverable errors everywhere**: every failure returns a typed error
//!   to the request's caller; nothing aborts the process
//! - **No hidden retries or refresh**: rejected and expired credentials
//!   surface to the caller, who decides when to re-authorize
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod address;
pub mod auth;
pub mod clients;
pub mod config;
pub mod documents;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{
    AccessTokenResponse, AuthScopes, AuthState, Credential, CredentialStore,
    MemoryCredentialStore, Session, SessionId,
};
pub use config::{ClientId, ClientSecret, FantasyConfig, FantasyConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export addressing and relay types
pub use address::{AddressError, ResourceAddress, ResourceKind};
pub use clients::{
    AuthenticatedTransport, DataType, HttpMethod, RelayError, RemoteResponse, RequestBody,
    RequestRelay,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_authorization, complete_authorization, BeginAuthResult, CallbackQuery, OAuthError,
    StateParam,
};
