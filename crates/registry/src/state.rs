// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use rusqlite::Connection;
use tokio::sync::Mutex;

/// Shared server state, injected into every handler.
///
/// The single long-lived SQLite handle lives here rather than in a global so
/// tests can substitute an isolated in-memory connection.
pub struct AppState {
    /// One statement at a time; every operation is a single statement, so no
    /// cross-statement transaction is ever needed.
    pub db: Mutex<Connection>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self { db: Mutex::new(conn) }
    }
}
