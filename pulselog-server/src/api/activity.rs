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

//! Ingestion endpoint for activity reports

use axum::{extract::State, http::StatusCode, Json};
use pulselog_core::DayKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiError, AppState};

/// Request body for POST /activity
#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    pub user_id: String,
    pub session_id: String,
    /// `YYYY-MM-DD`; today in UTC when omitted
    pub date: Option<String>,
}

/// Response for POST /activity
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub status: &'static str,
}

/// POST /activity - Record one (user, session) report.
///
/// Clients call this when a user opens the app; the same session may
/// be reported more than once, which the query side dedups.
///
/// # Response Codes
/// - 200: Recorded
/// - 400: Missing field or malformed date
/// - 500: Storage write failure
pub async fn record_activity(
    State(state): State<AppState>,
    Json(request): Json<ActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    debug!(user_id = %request.user_id, session_id = %request.session_id, "activity report");

    let day = request
        .date
        .as_deref()
        .map(|raw| raw.parse::<DayKey>())
        .transpose()?;

    let store = state.store.clone();
    tokio::task::spawn_blocking(move || {
        store.record(&request.user_id, &request.session_id, day)
    })
    .await
    .map_err(|join| ApiError::Internal(join.to_string()))??;

    Ok((StatusCode::OK, Json(ActivityResponse { status: "ok" })))
}
