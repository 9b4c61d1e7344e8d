//! Response types for the Fantasy Sports API.
//!
//! This module provides the [`RemoteResponse`] type: status, content type,
//! and raw body bytes, handed back verbatim for the schema layer to decode.

use std::borrow::Cow;

/// A raw response from the remote service.
///
/// The relay's job ends at handing back bytes with status — decoding into
/// typed records belongs to the response-schema collaborator, and this type
/// makes no assumption about JSON vs. XML. Domain-level error documents
/// (e.g. "trade is no longer pending") arrive here unmodified with their
/// non-2xx status.
///
/// # Example
///
/// ```rust
/// use fantasy_api::clients::RemoteResponse;
///
/// let response = RemoteResponse::new(
///     200,
///     Some("application/xml".to_string()),
///     b"<fantasy_content/>".to_vec(),
/// );
/// assert!(response.is_success());
/// assert_eq!(response.text(), "<fantasy_content/>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The `Content-Type` header value, if present.
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl RemoteResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// Returns `true` if the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    ///
    /// Convenience for logging and tests; decoding proper stays with the
    /// schema layer.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

// Verify RemoteResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RemoteResponse>();
};
