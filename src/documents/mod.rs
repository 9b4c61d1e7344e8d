//! Typed input documents for mutating requests.
//!
//! The service accepts mutations as XML documents under a `fantasy_content`
//! envelope: transaction documents (add/drop players, propose trades, edit
//! waivers, answer trades) POSTed or PUT against the transaction endpoints,
//! and roster documents PUT against a team's roster.
//!
//! The types here mirror the accepted input shape field by field and render
//! through [`to_body`](TransactionDocument::to_body) into the opaque
//! [`RequestBody`](crate::clients::RequestBody) the relay carries through
//! unmodified. Whether a mutation is legal (is the trade still pending? does
//! the league use FAAB?) is the service's to judge — these types only shape
//! the document.
//!
//! # Example
//!
//! ```rust
//! use fantasy_api::documents::TransactionDocument;
//!
//! let document = TransactionDocument::edit_waiver("248.l.55438.w.c.2_6093", Some(1), Some(20));
//! let xml = document.to_xml().unwrap();
//! assert!(xml.contains("<waiver_priority>1</waiver_priority>"));
//! assert!(xml.contains("<faab_bid>20</faab_bid>"));
//! ```

use crate::clients::RequestBody;
use serde::Serialize;
use thiserror::Error;

/// XML declaration prepended to every rendered document.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Errors raised while rendering an input document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document could not be serialized to XML.
    #[error("Failed to render input document: {message}")]
    Render {
        /// Serializer error detail.
        message: String,
    },
}

/// The type of a transaction or of one player's movement within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransactionType {
    /// Acquire a free agent or claim a waiver.
    #[serde(rename = "add")]
    Add,
    /// Release a player.
    #[serde(rename = "drop")]
    Drop,
    /// Acquire one player and release another in one transaction.
    #[serde(rename = "add/drop")]
    AddDrop,
    /// A trade between two teams, provisional until answered.
    #[serde(rename = "pending_trade")]
    PendingTrade,
    /// A waiver claim awaiting processing.
    #[serde(rename = "waiver")]
    Waiver,
}

/// Actions a manager or commissioner can take on a pending trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TradeAction {
    /// Accept a trade proposed to you.
    #[serde(rename = "accept")]
    Accept,
    /// Reject a trade proposed to you.
    #[serde(rename = "reject")]
    Reject,
    /// As commissioner, let an accepted trade through.
    #[serde(rename = "allow")]
    Allow,
    /// As commissioner, block an accepted trade.
    #[serde(rename = "disallow")]
    Disallow,
    /// As a manager, vote against an accepted trade.
    #[serde(rename = "vote_against")]
    VoteAgainst,
}

/// One player's movement within a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionData {
    /// The movement type for this player (add, drop, or pending trade).
    #[serde(rename = "type")]
    pub movement: TransactionType,
    /// The team the player leaves, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_team_key: Option<String>,
    /// The team the player joins, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_team_key: Option<String>,
}

/// A player entry in a transaction document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    /// The player being moved.
    pub player_key: String,
    /// How the player moves.
    pub transaction_data: TransactionData,
}

impl PlayerLine {
    /// A player being added to a team.
    #[must_use]
    pub fn added(player_key: impl Into<String>, destination_team_key: impl Into<String>) -> Self {
        Self {
            player_key: player_key.into(),
            transaction_data: TransactionData {
                movement: TransactionType::Add,
                source_team_key: None,
                destination_team_key: Some(destination_team_key.into()),
            },
        }
    }

    /// A player being dropped from a team.
    #[must_use]
    pub fn dropped(player_key: impl Into<String>, source_team_key: impl Into<String>) -> Self {
        Self {
            player_key: player_key.into(),
            transaction_data: TransactionData {
                movement: TransactionType::Drop,
                source_team_key: Some(source_team_key.into()),
                destination_team_key: None,
            },
        }
    }

    /// A player moving between teams in a trade.
    #[must_use]
    pub fn traded(
        player_key: impl Into<String>,
        source_team_key: impl Into<String>,
        destination_team_key: impl Into<String>,
    ) -> Self {
        Self {
            player_key: player_key.into(),
            transaction_data: TransactionData {
                movement: TransactionType::PendingTrade,
                source_team_key: Some(source_team_key.into()),
                destination_team_key: Some(destination_team_key.into()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct PlayerList {
    player: Vec<PlayerLine>,
}

/// A transaction input document.
///
/// POSTed against a league's transactions collection to create add/drop
/// transactions and trade proposals, or PUT against a transaction resource
/// to edit a waiver claim or answer a pending trade. Build one with the
/// purpose-specific constructors; every field not applicable to the purpose
/// stays absent from the rendered XML.
///
/// # Example
///
/// ```rust
/// use fantasy_api::documents::TransactionDocument;
///
/// // Replace one player with another, bidding 25 FAAB
/// let document = TransactionDocument::add_drop(
///     "238.p.5484",
///     "238.p.6327",
///     "238.l.627060.t.6",
/// )
/// .with_faab_bid(25);
///
/// let xml = document.to_xml().unwrap();
/// assert!(xml.contains("<type>add/drop</type>"));
/// assert!(xml.contains("<faab_bid>25</faab_bid>"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_key: Option<String>,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<TradeAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trade_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    waiver_priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    faab_bid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    voter_team_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trader_team_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tradee_team_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    players: Option<PlayerList>,
}

impl TransactionDocument {
    const fn empty(transaction_type: TransactionType) -> Self {
        Self {
            transaction_key: None,
            transaction_type,
            action: None,
            trade_note: None,
            waiver_priority: None,
            faab_bid: None,
            voter_team_key: None,
            trader_team_key: None,
            tradee_team_key: None,
            players: None,
        }
    }

    /// Creates an add transaction for one player.
    #[must_use]
    pub fn add_player(
        player_key: impl Into<String>,
        destination_team_key: impl Into<String>,
    ) -> Self {
        let mut document = Self::empty(TransactionType::Add);
        document.players = Some(PlayerList {
            player: vec![PlayerLine::added(player_key, destination_team_key)],
        });
        document
    }

    /// Creates a drop transaction for one player.
    #[must_use]
    pub fn drop_player(
        player_key: impl Into<String>,
        source_team_key: impl Into<String>,
    ) -> Self {
        let mut document = Self::empty(TransactionType::Drop);
        document.players = Some(PlayerList {
            player: vec![PlayerLine::dropped(player_key, source_team_key)],
        });
        document
    }

    /// Creates an add/drop transaction replacing one player with another on
    /// the same team.
    #[must_use]
    pub fn add_drop(
        add_player_key: impl Into<String>,
        drop_player_key: impl Into<String>,
        team_key: impl Into<String>,
    ) -> Self {
        let team_key = team_key.into();
        let mut document = Self::empty(TransactionType::AddDrop);
        document.players = Some(PlayerList {
            player: vec![
                PlayerLine::added(add_player_key, team_key.clone()),
                PlayerLine::dropped(drop_player_key, team_key),
            ],
        });
        document
    }

    /// Creates a trade proposal between two teams.
    ///
    /// `players` lists every player changing hands, built with
    /// [`PlayerLine::traded`].
    #[must_use]
    pub fn propose_trade(
        trader_team_key: impl Into<String>,
        tradee_team_key: impl Into<String>,
        players: Vec<PlayerLine>,
    ) -> Self {
        let mut document = Self::empty(TransactionType::PendingTrade);
        document.trader_team_key = Some(trader_team_key.into());
        document.tradee_team_key = Some(tradee_team_key.into());
        document.players = Some(PlayerList { player: players });
        document
    }

    /// Creates a waiver-claim edit for an existing transaction.
    ///
    /// Either the priority, the FAAB bid, or both may be changed; fields not
    /// supplied are absent from the document and the service leaves them
    /// untouched.
    #[must_use]
    pub fn edit_waiver(
        transaction_key: impl Into<String>,
        waiver_priority: Option<u32>,
        faab_bid: Option<u32>,
    ) -> Self {
        let mut document = Self::empty(TransactionType::Waiver);
        document.transaction_key = Some(transaction_key.into());
        document.waiver_priority = waiver_priority;
        document.faab_bid = faab_bid;
        document
    }

    /// Creates an answer to a pending trade: accept, reject, allow, or
    /// disallow.
    ///
    /// For [`TradeAction::VoteAgainst`] use [`vote_against`](Self::vote_against),
    /// which carries the required voter team.
    #[must_use]
    pub fn respond_to_trade(transaction_key: impl Into<String>, action: TradeAction) -> Self {
        let mut document = Self::empty(TransactionType::PendingTrade);
        document.transaction_key = Some(transaction_key.into());
        document.action = Some(action);
        document
    }

    /// Creates a vote against an accepted trade awaiting processing.
    #[must_use]
    pub fn vote_against(
        transaction_key: impl Into<String>,
        voter_team_key: impl Into<String>,
    ) -> Self {
        let mut document = Self::empty(TransactionType::PendingTrade);
        document.transaction_key = Some(transaction_key.into());
        document.action = Some(TradeAction::VoteAgainst);
        document.voter_team_key = Some(voter_team_key.into());
        document
    }

    /// Attaches a note to a trade proposal or answer.
    #[must_use]
    pub fn with_trade_note(mut self, note: impl Into<String>) -> Self {
        self.trade_note = Some(note.into());
        self
    }

    /// Attaches a FAAB bid to a waiver claim.
    #[must_use]
    pub const fn with_faab_bid(mut self, bid: u32) -> Self {
        self.faab_bid = Some(bid);
        self
    }

    /// Renders the document to its XML envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Render`] if serialization fails.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        render(&TransactionEnvelope { transaction: self })
    }

    /// Renders the document into a relay-ready request body.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Render`] if serialization fails.
    pub fn to_body(&self) -> Result<RequestBody, DocumentError> {
        Ok(RequestBody::xml(self.to_xml()?))
    }
}

/// Coverage period of a roster edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CoverageType {
    /// Weekly lineups (football).
    #[serde(rename = "week")]
    Week,
    /// Daily lineups (baseball, basketball, hockey).
    #[serde(rename = "date")]
    Date,
}

/// One player's position assignment in a roster edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterPlayer {
    /// The player whose position is set.
    pub player_key: String,
    /// The position to slot the player into (e.g. `WR`, `BN`).
    pub position: String,
}

impl RosterPlayer {
    /// Creates a position assignment.
    #[must_use]
    pub fn new(player_key: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            player_key: player_key.into(),
            position: position.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct RosterPlayerList {
    player: Vec<RosterPlayer>,
}

/// A roster-edit input document.
///
/// PUT against a team's roster to move players between positions for one
/// coverage period.
///
/// # Example
///
/// ```rust
/// use fantasy_api::documents::{RosterDocument, RosterPlayer};
///
/// let document = RosterDocument::for_week(
///     10,
///     vec![
///         RosterPlayer::new("242.p.8332", "WR"),
///         RosterPlayer::new("242.p.8334", "BN"),
///     ],
/// );
///
/// let xml = document.to_xml().unwrap();
/// assert!(xml.contains("<coverage_type>week</coverage_type>"));
/// assert!(xml.contains("<week>10</week>"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterDocument {
    coverage_type: CoverageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    players: RosterPlayerList,
}

impl RosterDocument {
    /// Creates a weekly roster edit.
    #[must_use]
    pub fn for_week(week: u32, players: Vec<RosterPlayer>) -> Self {
        Self {
            coverage_type: CoverageType::Week,
            week: Some(week),
            date: None,
            players: RosterPlayerList { player: players },
        }
    }

    /// Creates a daily roster edit. `date` is `YYYY-MM-DD`.
    #[must_use]
    pub fn for_date(date: impl Into<String>, players: Vec<RosterPlayer>) -> Self {
        Self {
            coverage_type: CoverageType::Date,
            week: None,
            date: Some(date.into()),
            players: RosterPlayerList { player: players },
        }
    }

    /// Renders the document to its XML envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Render`] if serialization fails.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        render(&RosterEnvelope { roster: self })
    }

    /// Renders the document into a relay-ready request body.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Render`] if serialization fails.
    pub fn to_body(&self) -> Result<RequestBody, DocumentError> {
        Ok(RequestBody::xml(self.to_xml()?))
    }
}

#[derive(Serialize)]
#[serde(rename = "fantasy_content")]
struct TransactionEnvelope<'a> {
    transaction: &'a TransactionDocument,
}

#[derive(Serialize)]
#[serde(rename = "fantasy_content")]
struct RosterEnvelope<'a> {
    roster: &'a RosterDocument,
}

fn render<T: Serialize>(envelope: &T) -> Result<String, DocumentError> {
    let body = quick_xml::se::to_string(envelope).map_err(|e| DocumentError::Render {
        message: e.to_string(),
    })?;
    Ok(format!("{XML_DECLARATION}{body}"))
}

// Verify document types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransactionDocument>();
    assert_send_sync::<RosterDocument>();
    assert_send_sync::<DocumentError>();
};
