#![forbid(unsafe_code)]

use std::sync::Arc;

use milkyway_kernel_contracts::Validator;

use crate::validator_store::StorageError;

/// Typed repository interface for the validator table.
///
/// Validators are keyed by their type string. Returned validators are shared immutable
/// snapshots; to change one, clone it and write it back through `save` or `update`.
pub trait ValidatorRepo: Send + Sync {
    /// All validators, in the repository's iteration order.
    fn get_all(&self) -> Vec<Arc<Validator>>;
    fn get_by_type(&self, validator_type: &str) -> Result<Arc<Validator>, StorageError>;
    /// Linear scan comparing `stash`.
    fn get_by_stash(&self, stash: &str) -> Result<Arc<Validator>, StorageError>;
    /// Insert or overwrite the row keyed by `validator.validator_type`.
    fn save(&self, validator: Validator);
    /// Overwrite an existing row; fails with `NotFound` and leaves the table untouched otherwise.
    fn update(&self, validator: Validator) -> Result<(), StorageError>;
}
