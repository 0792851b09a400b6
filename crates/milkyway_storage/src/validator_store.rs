#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use milkyway_kernel_contracts::Validator;
use parking_lot::RwLock;
use tracing::debug;

use crate::repo::ValidatorRepo;
use crate::sample_data;

const VALIDATORS_TABLE: &str = "validators";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{table} not found: {key}")]
    NotFound { table: &'static str, key: String },
}

impl StorageError {
    fn validator_not_found(key: &str) -> Self {
        StorageError::NotFound {
            table: VALIDATORS_TABLE,
            key: key.to_string(),
        }
    }
}

/// In-memory validator table keyed by validator type.
///
/// The lock covers map access only. Rows are `Arc` snapshots, so a reader never observes a
/// validator changing underneath it; writers replace whole rows.
#[derive(Debug, Default)]
pub struct ValidatorStore {
    validators: RwLock<BTreeMap<String, Arc<Validator>>>,
}

impl ValidatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the good/neutral/bad archetype validators.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        for validator in sample_data::sample_validators() {
            store.save(validator);
        }
        debug!(
            validators = store.len(),
            "validator store seeded with sample data"
        );
        store
    }

    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }
}

impl ValidatorRepo for ValidatorStore {
    fn get_all(&self) -> Vec<Arc<Validator>> {
        self.validators.read().values().cloned().collect()
    }

    fn get_by_type(&self, validator_type: &str) -> Result<Arc<Validator>, StorageError> {
        self.validators
            .read()
            .get(validator_type)
            .cloned()
            .ok_or_else(|| StorageError::validator_not_found(validator_type))
    }

    fn get_by_stash(&self, stash: &str) -> Result<Arc<Validator>, StorageError> {
        self.validators
            .read()
            .values()
            .find(|v| v.stash == stash)
            .cloned()
            .ok_or_else(|| StorageError::validator_not_found(stash))
    }

    fn save(&self, validator: Validator) {
        let key = validator.validator_type.as_str().to_string();
        self.validators.write().insert(key, Arc::new(validator));
    }

    fn update(&self, validator: Validator) -> Result<(), StorageError> {
        let key = validator.validator_type.as_str();
        let mut validators = self.validators.write();
        match validators.get_mut(key) {
            Some(row) => {
                *row = Arc::new(validator);
                Ok(())
            }
            None => Err(StorageError::validator_not_found(key)),
        }
    }
}
