//! Hierarchical resource addressing for the Fantasy Sports API.
//!
//! The remote service exposes a nested resource/collection address space:
//! resources (a single league, a single team) contain sub-collections (the
//! teams of a league), which contain resources, chained arbitrarily deep and
//! narrowed by collection-level filters. This module models a position in
//! that space as a [`ResourceAddress`] value and renders it to the service's
//! path syntax.
//!
//! # Address Anatomy
//!
//! Each segment of an address is either:
//!
//! - **collection-scoped** (keyless, plural semantics): `teams`, `players`
//! - **resource-scoped** (one explicit key, singular semantics):
//!   `league/223.l.431`
//! - **keyed-collection-scoped** (several explicit keys):
//!   `teams;team_keys=223.l.431.t.1,223.l.431.t.2`
//!
//! Segments carry semicolon-delimited filters (`players;status=A`) and may
//! request sibling sub-resources in one round trip through the `out`
//! selector (`league/223.l.431;out=settings,standings`). Chained segments
//! are appended with `/`.
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::address::{ResourceAddress, ResourceKind};
//!
//! let address = ResourceAddress::resource(ResourceKind::Team, "223.l.431.t.1")
//!     .sub(ResourceAddress::collection(ResourceKind::Roster).filter("week", "10"));
//!
//! assert_eq!(address.compose().unwrap(), "team/223.l.431.t.1/roster;week=10");
//! ```

mod compose;

pub use compose::AddressError;

use std::collections::BTreeMap;

/// The kinds of resources and collections the service exposes.
///
/// Each kind knows its singular and collection renderings and the name of
/// its key-list parameter (`team` / `teams` / `team_keys`). Scoping
/// sub-resources such as `roster` or `standings` render the same either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A fantasy game (a sport in a season), e.g. `game/nfl`.
    Game,
    /// A league within a game.
    League,
    /// A team within a league.
    Team,
    /// A professional player.
    Player,
    /// An add/drop/trade/waiver transaction within a league.
    Transaction,
    /// A Yahoo user; generally addressed via `users;use_login=1`.
    User,
    /// A team's roster sub-resource.
    Roster,
    /// A league's standings sub-resource.
    Standings,
    /// A league's scoreboard sub-resource.
    Scoreboard,
    /// A league's settings sub-resource.
    Settings,
    /// A team's matchups sub-resource.
    Matchups,
    /// A stats sub-resource.
    Stats,
    /// A league's draft results sub-resource.
    DraftResults,
}

impl ResourceKind {
    /// Returns the singular form used when addressing one keyed resource.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::League => "league",
            Self::Team => "team",
            Self::Player => "player",
            Self::Transaction => "transaction",
            Self::User => "user",
            Self::Roster => "roster",
            Self::Standings => "standings",
            Self::Scoreboard => "scoreboard",
            Self::Settings => "settings",
            Self::Matchups => "matchups",
            Self::Stats => "stats",
            Self::DraftResults => "draftresults",
        }
    }

    /// Returns the collection form used for keyless and multi-key segments.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Game => "games",
            Self::League => "leagues",
            Self::Team => "teams",
            Self::Player => "players",
            Self::Transaction => "transactions",
            Self::User => "users",
            // Scoping sub-resources have no plural form
            Self::Roster
            | Self::Standings
            | Self::Scoreboard
            | Self::Settings
            | Self::Matchups
            | Self::Stats
            | Self::DraftResults => self.singular(),
        }
    }

    /// Returns the key-list parameter name for the multi-key collection form.
    #[must_use]
    pub const fn key_param(self) -> &'static str {
        match self {
            Self::Game => "game_keys",
            Self::League => "league_keys",
            Self::Team => "team_keys",
            Self::Player => "player_keys",
            Self::Transaction => "transaction_keys",
            Self::User => "user_keys",
            Self::Roster => "roster_keys",
            Self::Standings => "standings_keys",
            Self::Scoreboard => "scoreboard_keys",
            Self::Settings => "settings_keys",
            Self::Matchups => "matchups_keys",
            Self::Stats => "stats_keys",
            Self::DraftResults => "draftresults_keys",
        }
    }
}

/// How a segment addresses its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Keyless collection request; plural semantics for downstream chaining.
    Collection,
    /// One identified resource; singular semantics.
    Resource(String),
    /// Several identified resources in collection-of-keys form.
    Keys(Vec<String>),
}

/// An immutable description of a position in the service's resource graph.
///
/// A `ResourceAddress` is a recursive value: the base segment plus an ordered
/// chain of nested segments, collection-level filters, and `out` selectors
/// for sibling sub-resources. Construction is by value-consuming builder
/// methods; composing the remote path is a pure function with no I/O.
///
/// # Determinism
///
/// Filters render sorted by name regardless of insertion order, so equal
/// addresses always compose to the identical string. `out` selectors render
/// in the order supplied.
///
/// # Example
///
/// ```rust
/// use fantasy_api::address::{ResourceAddress, ResourceKind};
///
/// // Teams across two leagues
/// let address = ResourceAddress::collection_of(
///     ResourceKind::League,
///     ["223.l.431", "223.l.21821"],
/// )
/// .sub(ResourceAddress::collection(ResourceKind::Team));
///
/// assert_eq!(
///     address.compose().unwrap(),
///     "leagues;league_keys=223.l.431,223.l.21821/teams"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceAddress {
    kind: ResourceKind,
    scope: Scope,
    filters: BTreeMap<String, String>,
    chain: Vec<ResourceAddress>,
    out: Vec<ResourceAddress>,
}

impl ResourceAddress {
    /// Creates a resource-scoped segment addressing one identified resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fantasy_api::address::{ResourceAddress, ResourceKind};
    ///
    /// let address = ResourceAddress::resource(ResourceKind::League, "223.l.431");
    /// assert_eq!(address.compose().unwrap(), "league/223.l.431");
    /// ```
    #[must_use]
    pub fn resource(kind: ResourceKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            scope: Scope::Resource(key.into()),
            filters: BTreeMap::new(),
            chain: Vec::new(),
            out: Vec::new(),
        }
    }

    /// Creates a keyless collection-scoped segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fantasy_api::address::{ResourceAddress, ResourceKind};
    ///
    /// let address = ResourceAddress::collection(ResourceKind::Player);
    /// assert_eq!(address.compose().unwrap(), "players");
    /// ```
    #[must_use]
    pub const fn collection(kind: ResourceKind) -> Self {
        Self {
            kind,
            scope: Scope::Collection,
            filters: BTreeMap::new(),
            chain: Vec::new(),
            out: Vec::new(),
        }
    }

    /// Creates a collection-scoped segment addressing several identified
    /// resources by key.
    ///
    /// An empty key list degrades to the keyless collection form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fantasy_api::address::{ResourceAddress, ResourceKind};
    ///
    /// let address =
    ///     ResourceAddress::collection_of(ResourceKind::Team, ["223.l.431.t.1", "223.l.431.t.2"]);
    /// assert_eq!(
    ///     address.compose().unwrap(),
    ///     "teams;team_keys=223.l.431.t.1,223.l.431.t.2"
    /// );
    /// ```
    #[must_use]
    pub fn collection_of<I, K>(kind: ResourceKind, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let scope = if keys.is_empty() {
            Scope::Collection
        } else {
            Scope::Keys(keys)
        };

        Self {
            kind,
            scope,
            filters: BTreeMap::new(),
            chain: Vec::new(),
            out: Vec::new(),
        }
    }

    /// Appends a chained sub-resource segment.
    #[must_use]
    pub fn sub(mut self, segment: Self) -> Self {
        self.chain.push(segment);
        self
    }

    /// Adds a collection-level filter (e.g. `status`, `position`, `week`).
    ///
    /// Filters render sorted by name; adding the same name twice keeps the
    /// last value.
    #[must_use]
    pub fn filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Requests a sibling sub-resource through the `out` selector.
    ///
    /// `out` selectors are one level deep by service rule: a selector that
    /// itself carries keys, filters, a chain, or nested selectors is rejected
    /// with [`AddressError::InvalidChaining`] at composition time.
    #[must_use]
    pub fn out(mut self, selector: Self) -> Self {
        self.out.push(selector);
        self
    }

    /// Returns the kind of the base segment.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns `true` if the base segment is keyless (plural semantics).
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self.scope, Scope::Collection)
    }

    /// Returns the explicit keys of the base segment, if any.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        match &self.scope {
            Scope::Collection => &[],
            Scope::Resource(key) => std::slice::from_ref(key),
            Scope::Keys(keys) => keys,
        }
    }

    /// Renders this address to the service's path syntax.
    ///
    /// Composition is pure and deterministic: no I/O, and repeated calls on
    /// equal addresses return the identical string.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidChaining`] if any `out` selector is not
    /// a bare sub-resource.
    pub fn compose(&self) -> Result<String, AddressError> {
        compose::compose(self)
    }

    pub(crate) const fn scope(&self) -> &Scope {
        &self.scope
    }

    pub(crate) const fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub(crate) fn chain(&self) -> &[Self] {
        &self.chain
    }

    pub(crate) fn out_selectors(&self) -> &[Self] {
        &self.out
    }
}

// Verify address types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceKind>();
    assert_send_sync::<ResourceAddress>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_singular_and_collection_forms() {
        assert_eq!(ResourceKind::League.singular(), "league");
        assert_eq!(ResourceKind::League.collection(), "leagues");
        assert_eq!(ResourceKind::League.key_param(), "league_keys");
    }

    #[test]
    fn test_scoping_sub_resources_have_no_plural() {
        assert_eq!(ResourceKind::Roster.collection(), "roster");
        assert_eq!(ResourceKind::Standings.collection(), "standings");
        assert_eq!(ResourceKind::DraftResults.collection(), "draftresults");
    }

    #[test]
    fn test_resource_scope_reports_single_key() {
        let address = ResourceAddress::resource(ResourceKind::Team, "223.l.431.t.1");
        assert!(!address.is_collection());
        assert_eq!(address.keys(), ["223.l.431.t.1"]);
    }

    #[test]
    fn test_collection_scope_is_keyless() {
        let address = ResourceAddress::collection(ResourceKind::Player);
        assert!(address.is_collection());
        assert!(address.keys().is_empty());
    }

    #[test]
    fn test_empty_key_list_degrades_to_collection() {
        let address = ResourceAddress::collection_of(ResourceKind::Team, Vec::<String>::new());
        assert!(address.is_collection());
        assert_eq!(address, ResourceAddress::collection(ResourceKind::Team));
    }

    #[test]
    fn test_keyed_collection_is_entity_scoped() {
        let address = ResourceAddress::collection_of(ResourceKind::Team, ["a", "b"]);
        assert!(!address.is_collection());
        assert_eq!(address.keys(), ["a", "b"]);
    }

    #[test]
    fn test_filter_overwrites_same_name() {
        let address = ResourceAddress::collection(ResourceKind::Player)
            .filter("status", "A")
            .filter("status", "W");
        assert_eq!(address.compose().unwrap(), "players;status=W");
    }

    #[test]
    fn test_address_equality_is_structural() {
        let a = ResourceAddress::resource(ResourceKind::League, "223.l.431")
            .filter("week", "10");
        let b = ResourceAddress::resource(ResourceKind::League, "223.l.431")
            .filter("week", "10");
        assert_eq!(a, b);
    }
}
