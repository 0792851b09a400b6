#![forbid(unsafe_code)]

pub mod repo;
pub mod sample_data;
pub mod validator_store;

pub use repo::ValidatorRepo;
pub use validator_store::{StorageError, ValidatorStore};
