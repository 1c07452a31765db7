// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport for the agent registry.

pub mod http;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the axum `Router` with all registry routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/agents",
            get(http::list_agents).post(http::create_agent).delete(http::delete_agent),
        )
        .route("/api/agents/max-sr", get(http::max_sr))
        // The browser dashboard is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
