//! OAuth scope handling for the Fantasy Sports API.
//!
//! This module provides the [`AuthScopes`] type for managing OAuth scopes,
//! including parsing and implied scope handling.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of OAuth scopes for Yahoo API access.
///
/// This type handles parsing, deduplication, and implied scope logic.
/// Yahoo scopes come in read/write pairs suffixed `-r` and `-w`; a write
/// scope implies the corresponding read scope. The Fantasy Sports scopes
/// are `fspt-r` (read) and `fspt-w` (read/write).
///
/// # Implied Scopes
///
/// - `fspt-w` implies `fspt-r`
/// - any `{name}-w` scope implies `{name}-r`
///
/// This type automatically expands implied scopes when parsing.
///
/// # Serialization
///
/// `AuthScopes` serializes to and deserializes from a space-separated string,
/// the format the consent page expects in its `scope` query parameter:
///
/// ```rust
/// use fantasy_api::AuthScopes;
///
/// let scopes: AuthScopes = "fspt-w".parse().unwrap();
/// assert_eq!(scopes.to_string(), "fspt-r fspt-w");
/// ```
///
/// # Example
///
/// ```rust
/// use fantasy_api::AuthScopes;
///
/// let scopes: AuthScopes = "fspt-w, openid".parse().unwrap();
/// assert!(!scopes.is_empty());
///
/// let required: AuthScopes = "fspt-r".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: BTreeSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if this scope set covers all scopes in `other`.
    ///
    /// A scope set "covers" another if it contains all the scopes
    /// from the other set (considering implied scopes).
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.iter().all(|s| self.scopes.contains(s))
    }

    /// Returns an iterator over the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Adds implied read scopes for write permissions.
    fn add_implied_scopes(&mut self) {
        let implied: Vec<String> = self
            .scopes
            .iter()
            .filter_map(|scope| Self::get_implied_scope(scope))
            .collect();

        for scope in implied {
            self.scopes.insert(scope);
        }
    }

    fn get_implied_scope(scope: &str) -> Option<String> {
        scope.strip_suffix("-w").map(|name| format!("{name}-r"))
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();

        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }
            if !scope
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("scope '{scope}' contains invalid characters"),
                });
            }
            scopes.insert(scope.to_string());
        }

        let mut result = Self { scopes };
        result.add_implied_scopes();
        Ok(result)
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for scope in &self.scopes {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(scope)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for AuthScopes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// Verify AuthScopes is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthScopes>();
};
