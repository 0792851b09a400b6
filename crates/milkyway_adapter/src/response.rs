#![forbid(unsafe_code)]

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use milkyway_storage::StorageError;
use serde::{Deserialize, Serialize};

/// Uniform envelope for every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: String, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{source}")]
    NotFound {
        message: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("{reason}")]
    BadRequest {
        message: &'static str,
        reason: String,
    },
    #[error("route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn not_found(message: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |source| ApiError::NotFound { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound { message, .. } | ApiError::BadRequest { message, .. } => *message,
            ApiError::RouteNotFound => "Route not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()>::failure(self.to_string(), self.message());
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}
