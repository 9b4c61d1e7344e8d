//! Authentication and credential lifecycle for the Fantasy Sports API.
//!
//! This module contains everything between "first contact" and "authorized
//! request": the typed [`Session`] record, the [`Credential`] produced by the
//! authorization handshake, the [`CredentialStore`] it is persisted in, the
//! [`AuthScopes`] requested on the consent page, and the [`oauth`] handshake
//! itself.

pub mod oauth;

mod credential;
mod scopes;
mod session;
mod store;

pub use credential::{AccessTokenResponse, Credential};
pub use scopes::AuthScopes;
pub use session::{AuthState, Session, SessionId};
pub use store::{CredentialStore, MemoryCredentialStore};
