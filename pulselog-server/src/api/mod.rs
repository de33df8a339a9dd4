// Copyright 2025 Pulselog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! HTTP API surface
//!
//! Thin glue over the store and the query engine: parameter
//! validation, error mapping, JSON in and out.

pub mod activity;
pub mod health;
pub mod stats;

pub use activity::record_activity;
pub use health::health_check;
pub use stats::get_stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulselog_core::PulselogError;
use pulselog_query::QueryEngine;
use pulselog_storage::ActivityStore;
use serde::Serialize;
use std::sync::Arc;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<PulselogError> for ApiError {
    fn from(err: PulselogError) -> Self {
        match err {
            // Malformed input from the caller
            PulselogError::InvalidDayKey(_) | PulselogError::InvalidEvent(_) => {
                ApiError::BadRequest(err.to_string())
            }
            // Storage failures are the server's problem, not the caller's
            PulselogError::Io(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
    pub engine: Arc<QueryEngine>,
}
