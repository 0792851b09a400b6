#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::BlockRange;
use crate::event::{Event, EVENT_HEARTBEAT_RECEIVED, EVENT_REWARDED, EVENT_SLASHED};

/// Behavioural archetype of a validator. Also the store's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorType {
    Good,
    Neutral,
    Bad,
}

impl ValidatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorType::Good => "good",
            ValidatorType::Neutral => "neutral",
            ValidatorType::Bad => "bad",
        }
    }
}

impl std::fmt::Display for ValidatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub stash: String,
    #[serde(rename = "type")]
    pub validator_type: ValidatorType,
    pub description: String,
    /// Chronological by construction; not re-sorted on append.
    pub events: Vec<Event>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validator {
    pub fn new(
        stash: impl Into<String>,
        validator_type: ValidatorType,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            stash: stash.into(),
            validator_type,
            description: description.into(),
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
        self.updated_at = Utc::now();
    }

    pub fn events_by_type(&self, event_type: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn events_by_block_range(&self, range: BlockRange) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| range.contains(e.block))
            .cloned()
            .collect()
    }

    /// True once any heartbeat has ever been recorded. There is no recency window.
    pub fn is_active(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.event_type == EVENT_HEARTBEAT_RECEIVED)
    }

    pub fn has_been_slashed(&self) -> bool {
        self.events.iter().any(|e| e.event_type == EVENT_SLASHED)
    }

    /// Sum of `amount` over reward events; events without an integer amount are skipped.
    pub fn total_rewards(&self) -> i64 {
        self.events
            .iter()
            .filter(|e| e.event_type == EVENT_REWARDED)
            .filter_map(Event::amount)
            .fold(0i64, i64::saturating_add)
    }
}
