//! Authenticated transport and request relay for the Fantasy Sports API.
//!
//! This module contains the network-facing half of the SDK:
//!
//! - [`AuthenticatedTransport`]: a `reqwest` wrapper attaching the session
//!   credential as a bearer header per request
//! - [`RequestRelay`]: the orchestration layer — compose the address,
//!   resolve the credential, dispatch the verb, hand back raw bytes
//! - [`RemoteResponse`]: status + content type + body, passed through
//!   verbatim for the schema layer to decode
//! - [`RelayError`]: the typed failure surface; nothing is retried or
//!   swallowed

mod errors;
mod relay;
mod request;
mod response;
mod transport;

pub use errors::RelayError;
pub use relay::RequestRelay;
pub use request::{DataType, HttpMethod, RequestBody};
pub use response::RemoteResponse;
pub use transport::AuthenticatedTransport;
