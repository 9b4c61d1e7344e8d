//! Outbound request types for the Fantasy Sports API.
//!
//! This module provides the [`HttpMethod`] verb enum and the [`RequestBody`]
//! payload carried by mutating verbs.

use std::fmt;

/// HTTP verbs supported by the remote service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET for retrieving resources and collections.
    Get,
    /// HTTP POST for creating transactions (add/drop/trade proposals).
    Post,
    /// HTTP PUT for editing waivers, answering trades, and roster edits.
    Put,
    /// HTTP DELETE for cancelling pending waivers and trades.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// XML content type (`application/xml`) — the service's input format.
    Xml,
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::Json => "application/json",
        }
    }
}

/// A caller-supplied body for a mutating request.
///
/// The relay carries the body through byte-for-byte — no merging, defaulting,
/// or validation of domain legality. Typed input documents from
/// [`documents`](crate::documents) render into this via their `to_body()`
/// helpers.
///
/// # Example
///
/// ```rust
/// use fantasy_api::clients::{DataType, RequestBody};
///
/// let body = RequestBody::xml("<fantasy_content/>");
/// assert_eq!(body.data_type.as_content_type(), "application/xml");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestBody {
    /// The serialized document.
    pub content: String,
    /// The content type the document is declared as.
    pub data_type: DataType,
}

impl RequestBody {
    /// Creates an XML body.
    #[must_use]
    pub fn xml(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            data_type: DataType::Xml,
        }
    }

    /// Creates a JSON body.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            data_type: DataType::Json,
        }
    }
}

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<RequestBody>();
};
