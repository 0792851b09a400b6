#![forbid(unsafe_code)]

use std::sync::Arc;

use milkyway_kernel_contracts::{BlockRange, Event, EventCategory, Validator, ValidatorStats};
use milkyway_storage::{StorageError, ValidatorRepo};
use tracing::debug;

/// Per-validator queries. Every call reads a fresh snapshot from the repository.
#[derive(Clone)]
pub struct ValidatorQueryService {
    repo: Arc<dyn ValidatorRepo>,
}

impl ValidatorQueryService {
    pub fn new(repo: Arc<dyn ValidatorRepo>) -> Self {
        Self { repo }
    }

    pub fn get_all_validators(&self) -> Vec<Arc<Validator>> {
        let validators = self.repo.get_all();
        debug!(count = validators.len(), "get_all_validators");
        validators
    }

    pub fn get_validator_by_type(
        &self,
        validator_type: &str,
    ) -> Result<Arc<Validator>, StorageError> {
        debug!(validator_type, "get_validator_by_type");
        self.repo.get_by_type(validator_type)
    }

    pub fn get_validator_by_stash(&self, stash: &str) -> Result<Arc<Validator>, StorageError> {
        debug!(stash, "get_validator_by_stash");
        self.repo.get_by_stash(stash)
    }

    pub fn get_validator_events(&self, validator_type: &str) -> Result<Vec<Event>, StorageError> {
        let validator = self.repo.get_by_type(validator_type)?;
        debug!(
            validator_type,
            count = validator.events.len(),
            "get_validator_events"
        );
        Ok(validator.events.clone())
    }

    pub fn get_validator_events_by_type(
        &self,
        validator_type: &str,
        event_type: &str,
    ) -> Result<Vec<Event>, StorageError> {
        let validator = self.repo.get_by_type(validator_type)?;
        let events = validator.events_by_type(event_type);
        debug!(
            validator_type,
            event_type,
            count = events.len(),
            "get_validator_events_by_type"
        );
        Ok(events)
    }

    /// Inclusive on both ends. An inverted range yields no events rather than an error.
    pub fn get_validator_events_by_block_range(
        &self,
        validator_type: &str,
        start_block: u64,
        end_block: u64,
    ) -> Result<Vec<Event>, StorageError> {
        let validator = self.repo.get_by_type(validator_type)?;
        let events = validator.events_by_block_range(BlockRange::new(start_block, end_block));
        debug!(
            validator_type,
            start_block,
            end_block,
            count = events.len(),
            "get_validator_events_by_block_range"
        );
        Ok(events)
    }

    pub fn get_validator_stats(&self, validator_type: &str) -> Result<ValidatorStats, StorageError> {
        let validator = self.repo.get_by_type(validator_type)?;

        let mut stats = ValidatorStats {
            total_events: validator.events.len(),
            total_rewards: validator.total_rewards(),
            is_active: validator.is_active(),
            has_been_slashed: validator.has_been_slashed(),
            ..ValidatorStats::default()
        };
        for event in &validator.events {
            match event.category() {
                EventCategory::Staking => stats.staking_events += 1,
                EventCategory::Governance => stats.governance_events += 1,
                EventCategory::Online => stats.online_events += 1,
                EventCategory::Offence => stats.offence_events += 1,
                EventCategory::Other => {}
            }
        }
        debug!(validator_type, total_events = stats.total_events, "get_validator_stats");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milkyway_kernel_contracts::ValidatorType;
    use milkyway_storage::ValidatorStore;
    use serde_json::json;

    fn service_with(validators: Vec<Validator>) -> ValidatorQueryService {
        let store = ValidatorStore::new();
        for v in validators {
            store.save(v);
        }
        ValidatorQueryService::new(Arc::new(store))
    }

    fn seeded() -> ValidatorQueryService {
        ValidatorQueryService::new(Arc::new(ValidatorStore::with_sample_data()))
    }

    #[test]
    fn at_vq_01_single_reward_scenario() {
        let mut v = Validator::new("X", ValidatorType::Good, "d");
        v.add_event(Event::new(
            112073,
            "staking.Rewarded",
            json!({"stash": "X", "amount": 14783456789_i64}),
        ));
        let svc = service_with(vec![v]);

        let stats = svc.get_validator_stats("good").unwrap();
        assert_eq!(stats.total_rewards, 14_783_456_789);
        assert!(!stats.is_active);
        assert!(!stats.has_been_slashed);
        assert_eq!(stats.total_events, 1);
        assert_eq!(stats.staking_events, 1);
    }

    #[test]
    fn at_vq_02_unknown_type_is_not_found_everywhere() {
        let svc = seeded();
        assert!(svc.get_validator_by_type("missing").is_err());
        assert!(svc.get_validator_events("missing").is_err());
        assert!(svc.get_validator_events_by_type("missing", "x.Y").is_err());
        assert!(svc
            .get_validator_events_by_block_range("missing", 0, u64::MAX)
            .is_err());
        assert!(matches!(
            svc.get_validator_stats("missing"),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn at_vq_03_events_by_type_is_subset_with_matching_type() {
        let svc = seeded();
        let all = svc.get_validator_events("good").unwrap();
        let rewarded = svc
            .get_validator_events_by_type("good", "staking.Rewarded")
            .unwrap();
        assert_eq!(rewarded.len(), 3);
        assert!(rewarded.iter().all(|e| e.event_type == "staking.Rewarded"));
        assert!(rewarded.iter().all(|e| all.contains(e)));
        assert!(svc
            .get_validator_events_by_type("good", "no.SuchEvent")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn at_vq_04_block_range_inclusive_and_inverted_empty() {
        let svc = seeded();
        let events = svc
            .get_validator_events_by_block_range("good", 112073, 112076)
            .unwrap();
        let blocks: Vec<u64> = events.iter().map(|e| e.block).collect();
        assert_eq!(blocks, vec![112073, 112074, 112075, 112076]);

        assert!(svc
            .get_validator_events_by_block_range("good", 112076, 112073)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn at_vq_05_seeded_stats_per_archetype() {
        let svc = seeded();

        let good = svc.get_validator_stats("good").unwrap();
        assert_eq!(good.total_events, 40);
        assert_eq!(good.staking_events, 12);
        assert_eq!(good.governance_events, 5);
        assert_eq!(good.online_events, 4);
        assert_eq!(good.offence_events, 0);
        assert_eq!(good.total_rewards, 44_990_987_653);
        assert!(good.is_active && !good.has_been_slashed);

        let neutral = svc.get_validator_stats("neutral").unwrap();
        assert_eq!(neutral.staking_events, 12);
        assert_eq!(neutral.governance_events, 2);
        assert_eq!(neutral.online_events, 5);
        assert_eq!(neutral.total_rewards, 18_556_790_011);

        let bad = svc.get_validator_stats("bad").unwrap();
        assert_eq!(bad.total_events, 37);
        assert_eq!(bad.staking_events, 8);
        assert_eq!(bad.governance_events, 1);
        assert_eq!(bad.online_events, 6);
        assert_eq!(bad.offence_events, 3);
        assert_eq!(bad.total_rewards, 0);
        assert!(!bad.is_active && bad.has_been_slashed);
    }

    #[test]
    fn at_vq_06_heartbeat_has_no_recency_decay() {
        let mut v = Validator::new("H", ValidatorType::Neutral, "d");
        v.add_event(Event::new(1, "imOnline.HeartbeatReceived", json!({})));
        v.add_event(Event::new(1_000_000_000, "session.NewSession", json!({})));
        let svc = service_with(vec![v]);
        assert!(svc.get_validator_stats("neutral").unwrap().is_active);
    }

    #[test]
    fn at_vq_07_lookup_by_stash() {
        let svc = seeded();
        let v = svc.get_validator_by_stash("5HGjWAeFD...Bad").unwrap();
        assert_eq!(v.validator_type, ValidatorType::Bad);
        assert!(svc.get_validator_by_stash("nope").is_err());
        assert_eq!(svc.get_all_validators().len(), 3);
    }
}
