// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers for the agent registry.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{ApiError, STORAGE_FAILED};
use crate::shortname::short_name;
use crate::state::AppState;

// -- Request/Response types ---------------------------------------------------

/// Envelope for every successful response.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct AgentNameRequest {
    #[serde(default)]
    pub agent_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedAgent {
    pub sr_number: i64,
    pub agent_name: String,
}

#[derive(Debug, Serialize)]
pub struct MaxSrEntry {
    pub agent_name: String,
    pub max_sr_number: i64,
    pub short_name: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub agent_name: String,
    pub changes: usize,
}

// -- Handlers -----------------------------------------------------------------

/// `GET /api/agents` — all registrations, storage order.
pub async fn list_agents(State(s): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = s.db.lock().await;
    match db::list_agents(&conn) {
        Ok(rows) => Json(DataResponse { data: rows }).into_response(),
        Err(e) => storage_error("failed to list agents", &e),
    }
}

/// `GET /api/agents/max-sr` — highest sr_number per name, with derived short
/// name.
pub async fn max_sr(State(s): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = s.db.lock().await;
    match db::max_sr_by_name(&conn) {
        Ok(rows) => {
            let data: Vec<MaxSrEntry> = rows
                .into_iter()
                .map(|(agent_name, max_sr_number)| MaxSrEntry {
                    short_name: short_name(&agent_name),
                    agent_name,
                    max_sr_number,
                })
                .collect();
            Json(DataResponse { data }).into_response()
        }
        Err(e) => storage_error("failed to aggregate max sr_number", &e),
    }
}

/// `POST /api/agents` — register an agent.
pub async fn create_agent(
    State(s): State<Arc<AppState>>,
    Json(req): Json<AgentNameRequest>,
) -> impl IntoResponse {
    let agent_name = match require_agent_name(req) {
        Ok(name) => name,
        Err(resp) => return resp,
    };
    let conn = s.db.lock().await;
    match db::insert_agent(&conn, &agent_name) {
        Ok(sr_number) => {
            tracing::info!(agent = %agent_name, sr_number, "agent registered");
            Json(DataResponse { data: CreatedAgent { sr_number, agent_name } }).into_response()
        }
        Err(e) => storage_error("failed to insert agent", &e),
    }
}

/// `DELETE /api/agents` — remove every registration matching the name.
/// Matching zero rows is a success (`changes: 0`), not an error.
pub async fn delete_agent(
    State(s): State<Arc<AppState>>,
    Json(req): Json<AgentNameRequest>,
) -> impl IntoResponse {
    let agent_name = match require_agent_name(req) {
        Ok(name) => name,
        Err(resp) => return resp,
    };
    let conn = s.db.lock().await;
    match db::delete_agents(&conn, &agent_name) {
        Ok(changes) => {
            tracing::info!(agent = %agent_name, changes, "agent registrations deleted");
            Json(DataResponse { data: DeleteOutcome { agent_name, changes } }).into_response()
        }
        Err(e) => storage_error("failed to delete agent", &e),
    }
}

// -- Helpers ------------------------------------------------------------------

/// Presence check for the one required field. Absent, `null`, and empty all
/// reject before any storage access.
fn require_agent_name(req: AgentNameRequest) -> Result<String, axum::response::Response> {
    match req.agent_name.filter(|n| !n.is_empty()) {
        Some(name) => Ok(name),
        None => Err(ApiError::BadRequest
            .to_http_response("agent_name is required")
            .into_response()),
    }
}

/// Log the underlying storage failure server-side; callers get a generic
/// message only.
fn storage_error(context: &str, err: &rusqlite::Error) -> axum::response::Response {
    tracing::error!(err = %err, "{context}");
    ApiError::Storage.to_http_response(STORAGE_FAILED).into_response()
}
