#![forbid(unsafe_code)]

pub mod config;
pub mod response;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use milkyway_engines::{EventQueryService, ValidatorQueryService};
use milkyway_kernel_contracts::{Event, EventStats, Validator, ValidatorStats};
use milkyway_storage::{ValidatorRepo, ValidatorStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{AdapterConfig, ConfigError};
pub use response::{ApiError, ApiResponse, ApiResult};

use response::ok;

pub const SERVICE_NAME: &str = "blockchain-data-api";

/// Route table logged at startup.
pub const ROUTES: &[(&str, &str)] = &[
    ("/api/v1/validators", "Get all validators"),
    ("/api/v1/validators/:type", "Get specific validator (good/neutral/bad)"),
    ("/api/v1/validators/stash/:stash", "Get validator by stash address"),
    ("/api/v1/validators/:type/events", "Get events for specific validator"),
    ("/api/v1/validators/:type/events/:event_type", "Get events by type for validator"),
    (
        "/api/v1/validators/:type/events/blocks/:start/:end",
        "Get events by block range for validator",
    ),
    ("/api/v1/validators/:type/stats", "Get validator statistics"),
    ("/api/v1/events", "Get all events"),
    ("/api/v1/events/:event_type", "Get events by event type"),
    ("/api/v1/events/blocks/:start/:end", "Get events by block range"),
    ("/api/v1/events/category/:category", "Get events by category"),
    ("/api/v1/events/validator/:stash", "Get events by validator"),
    ("/api/v1/events/stats", "Get event statistics"),
    ("/api/v1/health", "Health check"),
];

#[derive(Clone)]
pub struct AppState {
    pub validators: ValidatorQueryService,
    pub events: EventQueryService,
}

impl AppState {
    pub fn new(repo: Arc<dyn ValidatorRepo>) -> Self {
        Self {
            validators: ValidatorQueryService::new(repo.clone()),
            events: EventQueryService::new(repo),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(Arc::new(ValidatorStore::with_sample_data()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub fn build_router(state: AppState, config: &AdapterConfig) -> Router {
    let api = Router::new()
        .route("/validators", get(get_all_validators))
        .route("/validators/stash/:stash", get(get_validator_by_stash))
        .route("/validators/:type", get(get_validator_by_type))
        .route("/validators/:type/events", get(get_validator_events))
        .route(
            "/validators/:type/events/:event_type",
            get(get_validator_events_by_type),
        )
        .route(
            "/validators/:type/events/blocks/:start/:end",
            get(get_validator_events_by_block_range),
        )
        .route("/validators/:type/stats", get(get_validator_stats))
        .route("/events", get(get_all_events))
        .route("/events/stats", get(get_event_stats))
        .route("/events/blocks/:start/:end", get(get_events_by_block_range))
        .route("/events/category/:category", get(get_events_by_category))
        .route("/events/validator/:stash", get(get_events_by_validator))
        .route("/events/:event_type", get(get_events_by_type))
        .route("/health", get(healthz));

    let router = Router::new()
        .nest("/api/v1", api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors_enabled {
        router.layer(cors_layer())
    } else {
        router
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT, AUTHORIZATION])
}

fn parse_block(raw: &str, message: &'static str) -> Result<u64, ApiError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| ApiError::BadRequest {
            message,
            reason: err.to_string(),
        })
}

fn parse_block_range(start: &str, end: &str) -> Result<(u64, u64), ApiError> {
    Ok((
        parse_block(start, "Invalid start block")?,
        parse_block(end, "Invalid end block")?,
    ))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn healthz() -> ApiResult<HealthResponse> {
    ok(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// validators

async fn get_all_validators(State(state): State<AppState>) -> ApiResult<Vec<Arc<Validator>>> {
    ok(state.validators.get_all_validators())
}

async fn get_validator_by_type(
    State(state): State<AppState>,
    Path(validator_type): Path<String>,
) -> ApiResult<Arc<Validator>> {
    let validator = state
        .validators
        .get_validator_by_type(&validator_type)
        .map_err(ApiError::not_found("Validator not found"))?;
    ok(validator)
}

async fn get_validator_by_stash(
    State(state): State<AppState>,
    Path(stash): Path<String>,
) -> ApiResult<Arc<Validator>> {
    let validator = state
        .validators
        .get_validator_by_stash(&stash)
        .map_err(ApiError::not_found("Validator not found"))?;
    ok(validator)
}

async fn get_validator_events(
    State(state): State<AppState>,
    Path(validator_type): Path<String>,
) -> ApiResult<Vec<Event>> {
    let events = state
        .validators
        .get_validator_events(&validator_type)
        .map_err(ApiError::not_found("Validator events not found"))?;
    ok(events)
}

async fn get_validator_events_by_type(
    State(state): State<AppState>,
    Path((validator_type, event_type)): Path<(String, String)>,
) -> ApiResult<Vec<Event>> {
    let events = state
        .validators
        .get_validator_events_by_type(&validator_type, &event_type)
        .map_err(ApiError::not_found("Events not found"))?;
    ok(events)
}

async fn get_validator_events_by_block_range(
    State(state): State<AppState>,
    Path((validator_type, start, end)): Path<(String, String, String)>,
) -> ApiResult<Vec<Event>> {
    let (start_block, end_block) = parse_block_range(&start, &end)?;
    let events = state
        .validators
        .get_validator_events_by_block_range(&validator_type, start_block, end_block)
        .map_err(ApiError::not_found("Events not found"))?;
    ok(events)
}

async fn get_validator_stats(
    State(state): State<AppState>,
    Path(validator_type): Path<String>,
) -> ApiResult<ValidatorStats> {
    let stats = state
        .validators
        .get_validator_stats(&validator_type)
        .map_err(ApiError::not_found("Validator stats not found"))?;
    ok(stats)
}

// events

async fn get_all_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    ok(state.events.get_all_events())
}

async fn get_events_by_type(
    State(state): State<AppState>,
    Path(event_type): Path<String>,
) -> ApiResult<Vec<Event>> {
    ok(state.events.get_events_by_type(&event_type))
}

async fn get_events_by_block_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Vec<Event>> {
    let (start_block, end_block) = parse_block_range(&start, &end)?;
    ok(state.events.get_events_by_block_range(start_block, end_block))
}

async fn get_events_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Vec<Event>> {
    ok(state.events.get_events_by_category(&category))
}

async fn get_events_by_validator(
    State(state): State<AppState>,
    Path(stash): Path<String>,
) -> ApiResult<Vec<Event>> {
    ok(state.events.get_events_by_validator(&stash))
}

async fn get_event_stats(State(state): State<AppState>) -> ApiResult<EventStats> {
    ok(state.events.get_event_stats())
}
