//! Three-legged authorization for the Fantasy Sports API.
//!
//! This module drives the handshake that produces a delegated-access
//! credential:
//!
//! 1. **Authorization Initiation** ([`begin_authorization`]): generate the
//!    consent-page URL and store an anti-forgery state in the session, then
//!    redirect the end user to the service to grant access.
//!
//! 2. **Callback Completion** ([`complete_authorization`]): when the user is
//!    redirected back, verify the echoed state and exchange the authorization
//!    code for a [`Credential`](crate::auth::Credential), stored per session.
//!
//! After a successful completion the caller redirects the end user to the
//! configured landing location; that location is opaque to this SDK.
//!
//! # Security Features
//!
//! - **CSRF Protection**: the state parameter prevents cross-site request
//!   forgery; verification is mandatory and happens before any token exchange
//! - **Constant-Time Comparison**: state verification uses a constant-time
//!   algorithm to prevent timing attacks
//! - **Single-Use State**: a consumed state is never accepted again; a failed
//!   exchange requires a fresh `begin_authorization`
//!
//! # Example
//!
//! ```rust,ignore
//! use fantasy_api::{FantasyConfig, ClientId, ClientSecret, HostUrl};
//! use fantasy_api::{MemoryCredentialStore, Session, SessionId};
//! use fantasy_api::auth::oauth::{begin_authorization, complete_authorization, CallbackQuery};
//!
//! // Step 1: Configure the SDK
//! let config = FantasyConfig::builder()
//!     .client_id(ClientId::new("my-consumer-key").unwrap())
//!     .client_secret(ClientSecret::new("my-consumer-secret").unwrap())
//!     .host(HostUrl::new("https://myapp.example.com").unwrap())
//!     .scopes("fspt-w".parse().unwrap())
//!     .landing_url("/dashboard")
//!     .build()
//!     .unwrap();
//!
//! let store = MemoryCredentialStore::new();
//!
//! // Step 2: Begin authorization (in the auth route handler)
//! let mut session = Session::new(SessionId::new("browser-session-id"));
//! let begin = begin_authorization(&config, &mut session, "/auth/callback")?;
//! // Redirect the end user to begin.auth_url
//!
//! // Step 3: Complete authorization (in the callback route handler)
//! let callback = CallbackQuery::new(code_param, state_param).with_guid(guid_param);
//! let credential =
//!     complete_authorization(&config, &store, &mut session, &callback, "/auth/callback")
//!         .await?;
//! // Redirect the end user to config.landing_url()
//! ```

mod begin_auth;
mod callback;
mod error;
mod state;

pub use begin_auth::{begin_authorization, BeginAuthResult};
pub use callback::{complete_authorization, CallbackQuery};
pub use error::OAuthError;
pub use state::{constant_time_compare, StateParam};
