//! Analytics counter types shared by the query layer and the stats client.

use serde::{Deserialize, Serialize};

use crate::types::{PromptId, Timestamp};

/// Kind of analytics event. Wire form is lowercase (`view`/`copy`/`like`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    View,
    Copy,
    Like,
}

impl StatKind {
    /// Parse the wire name. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(Self::View),
            "copy" => Some(Self::Copy),
            "like" => Some(Self::Like),
            _ => None,
        }
    }
}

/// Point-in-time counter totals for one prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTotals {
    pub views: u64,
    pub copies: u64,
    pub likes: u64,
}

/// One raw analytics event, appended per increment and used solely for
/// time-windowed aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEvent {
    pub prompt_id: PromptId,
    pub kind: StatKind,
    pub visitor_id: String,
    pub created_at: Timestamp,
}

/// Trailing time window for period aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Today,
    Week,
    Month,
}

impl TimePeriod {
    /// Window length in trailing calendar days.
    pub fn days(self) -> i64 {
        match self {
            Self::Today => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}
