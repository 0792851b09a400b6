#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const STAKING_EVENTS: &[&str] = &[
    "staking.Bonded",
    "staking.ValidatorPrefsSet",
    "staking.StakersElected",
    "staking.PayoutStarted",
    "staking.Rewarded",
    "staking.EraPaid",
    "staking.Slashed",
    "staking.SlashReported",
    "staking.Chilled",
];

const GOVERNANCE_EVENTS: &[&str] = &["democracy.Voted", "democracy.NotPassed", "referenda.Confirmed"];

const ONLINE_EVENTS: &[&str] = &[
    "imOnline.HeartbeatReceived",
    "imOnline.AllGood",
    "imOnline.SomeOffline",
    "session.ValidatorDisabled",
];

const OFFENCE_EVENTS: &[&str] = &["offences.Offence"];

pub const EVENT_REWARDED: &str = "staking.Rewarded";
pub const EVENT_SLASHED: &str = "staking.Slashed";
pub const EVENT_HEARTBEAT_RECEIVED: &str = "imOnline.HeartbeatReceived";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Staking,
    Governance,
    Online,
    Offence,
    Other,
}

impl EventCategory {
    /// Classifies by exact membership of `event_type` in the fixed category sets.
    pub fn classify(event_type: &str) -> Self {
        if STAKING_EVENTS.contains(&event_type) {
            EventCategory::Staking
        } else if GOVERNANCE_EVENTS.contains(&event_type) {
            EventCategory::Governance
        } else if ONLINE_EVENTS.contains(&event_type) {
            EventCategory::Online
        } else if OFFENCE_EVENTS.contains(&event_type) {
            EventCategory::Offence
        } else {
            EventCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Staking => "staking",
            EventCategory::Governance => "governance",
            EventCategory::Online => "online",
            EventCategory::Offence => "offence",
            EventCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chain event attached to a validator.
///
/// `data` is an open payload whose shape depends on `event_type`; typed fields are
/// read on demand through [`Event::amount`] and [`Event::stash`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub block: u64,
    #[serde(rename = "event")]
    pub event_type: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Event {
    pub fn new(block: u64, event_type: impl Into<String>, data: Value) -> Self {
        Self {
            block,
            event_type: event_type.into(),
            data,
            timestamp: Utc::now(),
            hash: None,
        }
    }

    pub fn with_hash(
        block: u64,
        event_type: impl Into<String>,
        data: Value,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            hash: Some(hash.into()),
            ..Self::new(block, event_type, data)
        }
    }

    pub fn category(&self) -> EventCategory {
        EventCategory::classify(&self.event_type)
    }

    /// `amount` when present as an integer field of an object payload.
    pub fn amount(&self) -> Option<i64> {
        self.data.get("amount").and_then(Value::as_i64)
    }

    /// `stash` when present as a string field of an object payload.
    pub fn stash(&self) -> Option<&str> {
        self.data.get("stash").and_then(Value::as_str)
    }
}
