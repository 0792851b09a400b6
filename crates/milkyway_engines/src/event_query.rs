#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use milkyway_kernel_contracts::{BlockRange, Event, EventStats};
use milkyway_storage::ValidatorRepo;
use tracing::debug;

/// Queries over the union of every validator's events.
///
/// The union is rebuilt from the repository on each call: validators in repository order,
/// each validator's events in stored order.
#[derive(Clone)]
pub struct EventQueryService {
    repo: Arc<dyn ValidatorRepo>,
}

impl EventQueryService {
    pub fn new(repo: Arc<dyn ValidatorRepo>) -> Self {
        Self { repo }
    }

    pub fn get_all_events(&self) -> Vec<Event> {
        let events: Vec<Event> = self
            .repo
            .get_all()
            .iter()
            .flat_map(|v| v.events.iter().cloned())
            .collect();
        debug!(count = events.len(), "get_all_events");
        events
    }

    pub fn get_events_by_type(&self, event_type: &str) -> Vec<Event> {
        self.filtered(|e| e.event_type == event_type)
    }

    pub fn get_events_by_block_range(&self, start_block: u64, end_block: u64) -> Vec<Event> {
        let range = BlockRange::new(start_block, end_block);
        self.filtered(|e| range.contains(e.block))
    }

    /// Unknown category strings match nothing.
    pub fn get_events_by_category(&self, category: &str) -> Vec<Event> {
        self.filtered(|e| e.category().as_str() == category)
    }

    /// Events of the validator owning `stash`; empty when no validator matches.
    pub fn get_events_by_validator(&self, stash: &str) -> Vec<Event> {
        let events = self
            .repo
            .get_all()
            .iter()
            .find(|v| v.stash == stash)
            .map(|v| v.events.clone())
            .unwrap_or_default();
        debug!(stash, count = events.len(), "get_events_by_validator");
        events
    }

    pub fn get_event_stats(&self) -> EventStats {
        let mut stats = EventStats::default();
        let mut validators = BTreeSet::new();

        for event in self.get_all_events() {
            stats.total_events += 1;
            *stats
                .events_by_type
                .entry(event.event_type.clone())
                .or_default() += 1;
            *stats.events_by_category.entry(event.category()).or_default() += 1;
            *stats.events_by_block.entry(event.block).or_default() += 1;
            if let Some(amount) = event.amount() {
                stats.total_amount = stats.total_amount.saturating_add(amount);
            }
            if let Some(stash) = event.stash() {
                validators.insert(stash.to_string());
            }
        }
        stats.unique_validators = validators.into_iter().collect();
        debug!(
            total_events = stats.total_events,
            unique_validators = stats.unique_validators.len(),
            "get_event_stats"
        );
        stats
    }

    fn filtered(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        self.get_all_events().into_iter().filter(|e| keep(e)).collect()
    }
}
