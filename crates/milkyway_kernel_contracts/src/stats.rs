#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::EventCategory;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorStats {
    pub total_events: usize,
    pub staking_events: usize,
    pub governance_events: usize,
    pub online_events: usize,
    pub offence_events: usize,
    pub total_rewards: i64,
    pub is_active: bool,
    pub has_been_slashed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventStats {
    pub total_events: usize,
    pub events_by_type: BTreeMap<String, usize>,
    pub events_by_category: BTreeMap<EventCategory, usize>,
    pub events_by_block: BTreeMap<u64, usize>,
    /// Sum of every recoverable `amount`, regardless of event type.
    pub total_amount: i64,
    pub unique_validators: Vec<String>,
}
