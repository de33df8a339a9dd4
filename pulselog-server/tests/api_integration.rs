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

//! Integration tests for the HTTP handlers, driven directly against
//! a store in a temp directory.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use pulselog_query::QueryEngine;
use pulselog_server::api::{
    activity::ActivityRequest, get_stats, health_check, record_activity, stats::StatsParams,
    ApiError, AppState,
};
use pulselog_server::{app, config::ServerConfig};
use pulselog_storage::ActivityStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_state() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(ActivityStore::new(dir.path()));
    let engine = Arc::new(QueryEngine::new(Arc::clone(&store)));
    (dir, AppState { store, engine })
}

fn activity(user: &str, session: &str, date: &str) -> ActivityRequest {
    ActivityRequest {
        user_id: user.to_string(),
        session_id: session.to_string(),
        date: Some(date.to_string()),
    }
}

#[tokio::test]
async fn test_record_then_query_round_trip() {
    let (_dir, state) = test_state();

    for req in [
        activity("4", "2", "2015-10-05"),
        activity("4", "3", "2015-10-05"),
        activity("5", "1", "2015-10-05"),
    ] {
        let (status, _) = record_activity(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let params = StatsParams {
        start_date: "2015-10-05".to_string(),
        end_date: "2015-10-06".to_string(),
        user_id: None,
    };
    let Json(stats) = get_stats(State(state), Query(params)).await.unwrap();

    assert_eq!(stats.unique_users, 2);
    assert_eq!(stats.num_sessions, 3);
    assert_eq!(stats.avg_sessions_per_user, 1.5);
}

#[tokio::test]
async fn test_stats_rejects_each_malformed_date() {
    let (_dir, state) = test_state();

    // One valid date must not excuse the other being garbage.
    for (start, end) in [
        ("2015-10-05", "not-a-date"),
        ("not-a-date", "2015-10-05"),
        ("2015-13-40", "2015-10-05"),
    ] {
        let params = StatsParams {
            start_date: start.to_string(),
            end_date: end.to_string(),
            user_id: None,
        };
        let result = get_stats(State(state.clone()), Query(params)).await;
        assert!(
            matches!(result, Err(ApiError::BadRequest(_))),
            "accepted ({}, {})",
            start,
            end
        );
    }
}

#[tokio::test]
async fn test_record_rejects_malformed_date() {
    let (_dir, state) = test_state();

    let result = record_activity(
        State(state),
        Json(activity("1", "1", "2015/10/05")),
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
async fn test_router_rejects_missing_body_field() {
    let (_dir, state) = test_state();
    let router = app(state, &ServerConfig::default());

    // session_id absent: the JSON extractor rejects before the
    // handler runs (422 for a body that parses but is incomplete).
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/activity")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"user_id":"1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_router_rejects_missing_query_param() {
    let (_dir, state) = test_state();
    let router = app(state, &ServerConfig::default());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/stats?start_date=2015-10-05")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_router_serves_stats_end_to_end() {
    let (_dir, state) = test_state();
    state
        .store
        .record("4", "1", Some("2015-10-05".parse().unwrap()))
        .unwrap();
    let router = app(state, &ServerConfig::default());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/stats?start_date=2015-10-05&end_date=2015-10-06")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_store_root() {
    let (_dir, state) = test_state();

    let response = health_check(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
}
