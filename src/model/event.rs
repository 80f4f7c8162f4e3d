use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Claim,
    CheckGood,
    CheckBad,
    Vote,
    Death,
    Note,
}

/// One entry in the timeline. Immutable once appended; the description is
/// frozen at creation and never re-rendered from live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    pub id: String,
    /// In-game day the event belongs to, stamped at creation.
    pub day: u32,
    /// Acting player's id, or 0 for system-recorded entries.
    pub source_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<u32>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_witch_action: bool,
    #[serde(default)]
    pub is_sheriff_action: bool,
    /// Who cast the votes a VOTE tally records.
    #[serde(default)]
    pub voter_ids: Vec<u32>,
}

/// Everything the caller supplies when appending; id and timestamp are
/// assigned by the log.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub day: u32,
    pub source_id: u32,
    pub target_id: Option<u32>,
    pub kind: EventKind,
    pub description: String,
    pub is_witch_action: bool,
    pub is_sheriff_action: bool,
    pub voter_ids: Vec<u32>,
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Note
    }
}
