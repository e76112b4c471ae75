use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AttributeCategory, AttributeGroup, BadgeSummary};

/// Display name used when a page carries no title.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Ratings and profile data extracted from one player page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub source_url: String,
    pub overall_rating: Option<u32>,
    pub attributes: BTreeMap<AttributeCategory, AttributeGroup>,
    pub badges: BadgeSummary,
    pub details: PlayerDetails,
}

impl PlayerRecord {
    /// Whether the page yielded anything beyond the empty defaults.
    pub fn is_usable(&self) -> bool {
        self.name != UNKNOWN_PLAYER
            || self.overall_rating.is_some()
            || !self.attributes.is_empty()
            || self.badges.total() > 0
    }
}

/// Biographical details; fields missing from the page are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wingspan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

impl PlayerDetails {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
