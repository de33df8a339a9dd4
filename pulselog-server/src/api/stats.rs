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

//! Range-statistics endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use pulselog_core::DayKey;
use pulselog_query::ActivityStats;
use serde::Deserialize;
use tracing::debug;

use crate::api::{ApiError, AppState};

/// Query parameters for GET /stats
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub start_date: String,
    pub end_date: String,
    /// Restrict the aggregation to one user
    pub user_id: Option<String>,
}

/// GET /stats?start_date=&end_date=[&user_id=] - Aggregate activity
/// over an inclusive day range.
///
/// Both dates must individually parse as `YYYY-MM-DD`; one good date
/// does not excuse a bad one. An inverted range is an empty (not an
/// erroneous) result.
///
/// # Response Codes
/// - 200: `ActivityStats` JSON body
/// - 400: Missing or malformed date parameter
/// - 500: Storage read failure
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<ActivityStats>, ApiError> {
    let start: DayKey = params
        .start_date
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("malformed start_date: {}", params.start_date)))?;
    let end: DayKey = params
        .end_date
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("malformed end_date: {}", params.end_date)))?;

    debug!(%start, %end, user_id = ?params.user_id, "stats query");

    let engine = state.engine.clone();
    let stats = tokio::task::spawn_blocking(move || {
        engine.query(start, end, params.user_id.as_deref())
    })
    .await
    .map_err(|join| ApiError::Internal(join.to_string()))??;

    Ok(Json(stats))
}
