#![forbid(unsafe_code)]

pub mod common;
pub mod event;
pub mod stats;
pub mod validator;

pub use common::BlockRange;
pub use event::{Event, EventCategory};
pub use stats::{EventStats, ValidatorStats};
pub use validator::{Validator, ValidatorType};
