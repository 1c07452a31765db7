// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite access for the agent registry. Every exposed operation is exactly
//! one statement; SQLite's statement-level atomicity is the only isolation
//! this layer relies on.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};

/// An `agents` row as stored.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgentRow {
    pub sr_number: i64,
    pub agent_name: String,
    pub start_timestamp: Option<String>,
    pub stop_timestamp: Option<String>,
}

/// Open the registry database read/write. The file must already exist; the
/// `agents` schema is owned by the deployment, not by this service.
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
    Ok(conn)
}

/// All agents, in storage order.
pub fn list_agents(conn: &Connection) -> rusqlite::Result<Vec<AgentRow>> {
    let mut stmt = conn.prepare(
        "SELECT sr_number, agent_name, start_timestamp, stop_timestamp FROM agents",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(AgentRow {
            sr_number: row.get(0)?,
            agent_name: row.get(1)?,
            start_timestamp: row.get(2)?,
            stop_timestamp: row.get(3)?,
        })
    })?;
    rows.collect()
}

/// Highest `sr_number` for each distinct `agent_name`.
pub fn max_sr_by_name(conn: &Connection) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT agent_name, MAX(sr_number) AS max_sr_number FROM agents GROUP BY agent_name",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

/// Insert a registration; `sr_number` is storage-assigned and the start
/// timestamp is SQLite's current time. Returns the assigned `sr_number`.
pub fn insert_agent(conn: &Connection, agent_name: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO agents (agent_name, start_timestamp) VALUES (?1, datetime('now'))",
        params![agent_name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete every row whose name matches exactly. Names are not unique, so
/// this may affect zero, one, or many rows; returns the count.
pub fn delete_agents(conn: &Connection, agent_name: &str) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM agents WHERE agent_name = ?1", params![agent_name])
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
