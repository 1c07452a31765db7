// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Configuration for the agent registry server.
#[derive(Debug, Clone, clap::Parser)]
pub struct ServerConfig {
    /// Host to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "AGENTSD_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3001, env = "AGENTSD_PORT")]
    pub port: u16,

    /// Path to the SQLite database file. The file and its `agents` table
    /// must already exist; only the `Users` table is created on startup.
    #[arg(long, default_value = "agents_data.db", env = "AGENTSD_DB")]
    pub db: std::path::PathBuf,
}
