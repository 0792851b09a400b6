#![forbid(unsafe_code)]

pub mod event_query;
pub mod validator_query;

pub use event_query::EventQueryService;
pub use validator_query::ValidatorQueryService;
