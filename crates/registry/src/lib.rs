// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agentsd: HTTP registry for call-center agents over a SQLite store.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod shortname;
pub mod state;
pub mod transport;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::transport::build_router;

/// Run the registry server until shutdown.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let conn = db::open(&config.db)
        .with_context(|| format!("failed to open database {}", config.db.display()))?;
    tracing::info!(db = %config.db.display(), "connected to the registry database");

    // Seed the Users table before the listener binds so no request can
    // observe a partially bootstrapped store.
    bootstrap::run_bootstrap(&conn);

    let state = Arc::new(AppState::new(conn));
    let router = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("agentsd listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
