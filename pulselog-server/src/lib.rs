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

//! Pulselog HTTP server
//!
//! Transport glue over the storage and query crates: routing, request
//! validation, and error mapping. Retries and client-side timeouts
//! belong to callers; this layer only enforces a per-request timeout.

pub mod api;
pub mod config;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{get_stats, health_check, record_activity, AppState};
use config::ServerConfig;
use pulselog_query::QueryEngine;
use pulselog_storage::ActivityStore;

/// Build the application router for the given state and config
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.server.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/activity", post(record_activity))
        .route("/stats", get(get_stats))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulselog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pulselog Server");
    tracing::info!("Configuration: {:#?}", config);

    // Validate configuration; this also creates the store directory,
    // which the storage layer expects to pre-exist.
    config.validate()?;
    let addr = config.socket_addr()?;

    tracing::info!("Opening activity store at: {:?}", config.storage.data_dir);
    let store = Arc::new(ActivityStore::new(&config.storage.data_dir));
    let engine = Arc::new(QueryEngine::new(Arc::clone(&store)));

    let state = AppState { store, engine };
    let app = app(state, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Pulselog Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
