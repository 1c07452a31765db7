// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotent startup seeding of the `Users` table.
//!
//! Runs once per process start, before the listener binds. Statement
//! failures are logged and non-fatal; the server still comes up (degraded)
//! if the `Users` table could not be prepared.

use rusqlite::{params, Connection};

pub const DEFAULT_USER: &str = "fsladmin";
const DEFAULT_EMAIL: &str = "fsladmin@firstsource.com";
const DEFAULT_PASSWORD: &str = "fsladmin";

/// Create the `Users` table if it is not already present.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Users (
            name TEXT PRIMARY KEY,
            email TEXT,
            password TEXT
        )",
        [],
    )?;
    Ok(())
}

/// Seed the well-known default user if absent. Never overwrites an existing
/// row. Returns whether a row was inserted.
pub fn ensure_default_user(conn: &Connection) -> rusqlite::Result<bool> {
    let exists = conn
        .query_row("SELECT name FROM Users WHERE name = ?1", params![DEFAULT_USER], |_| Ok(()))
        .map(|()| true)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(false),
            other => Err(other),
        })?;
    if exists {
        return Ok(false);
    }
    match conn.execute(
        "INSERT INTO Users (name, email, password) VALUES (?1, ?2, ?3)",
        params![DEFAULT_USER, DEFAULT_EMAIL, DEFAULT_PASSWORD],
    ) {
        Ok(_) => Ok(true),
        // The check above is not atomic; the primary key backstops a
        // concurrent seed. A conflict means the row already exists.
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Full bootstrap sequence: schema, then default user.
pub fn run_bootstrap(conn: &Connection) {
    match ensure_schema(conn) {
        Ok(()) => tracing::info!("Users table is ready"),
        Err(e) => {
            tracing::error!(err = %e, "failed to create Users table");
            return;
        }
    }
    match ensure_default_user(conn) {
        Ok(true) => tracing::info!(user = DEFAULT_USER, "default user seeded"),
        Ok(false) => tracing::debug!(user = DEFAULT_USER, "default user already present"),
        Err(e) => tracing::error!(err = %e, "failed to seed default user"),
    }
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
