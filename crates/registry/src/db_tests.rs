// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE agents (
            sr_number INTEGER PRIMARY KEY AUTOINCREMENT,
            agent_name TEXT,
            start_timestamp TEXT,
            stop_timestamp TEXT
        );",
    )
    .expect("create agents schema");
    conn
}

#[test]
fn insert_assigns_increasing_sr_numbers() -> anyhow::Result<()> {
    let conn = test_conn();
    let first = insert_agent(&conn, "alpha")?;
    let second = insert_agent(&conn, "beta")?;
    let third = insert_agent(&conn, "alpha")?;
    assert!(second > first);
    assert!(third > second);
    Ok(())
}

#[test]
fn insert_sets_start_timestamp() -> anyhow::Result<()> {
    let conn = test_conn();
    insert_agent(&conn, "alpha")?;
    let rows = list_agents(&conn)?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].start_timestamp.is_some());
    assert!(rows[0].stop_timestamp.is_none());
    Ok(())
}

#[test]
fn max_sr_groups_by_name() -> anyhow::Result<()> {
    let conn = test_conn();
    conn.execute_batch(
        "INSERT INTO agents (sr_number, agent_name) VALUES (1, 'X');
         INSERT INTO agents (sr_number, agent_name) VALUES (3, 'X');
         INSERT INTO agents (sr_number, agent_name) VALUES (2, 'Y');",
    )?;

    let mut rows = max_sr_by_name(&conn)?;
    rows.sort();
    assert_eq!(rows, vec![("X".to_owned(), 3), ("Y".to_owned(), 2)]);
    Ok(())
}

#[test]
fn delete_matches_names_exactly() -> anyhow::Result<()> {
    let conn = test_conn();
    insert_agent(&conn, "alpha")?;
    insert_agent(&conn, "alpha")?;
    insert_agent(&conn, "Alpha")?;

    assert_eq!(delete_agents(&conn, "alpha")?, 2);
    assert_eq!(delete_agents(&conn, "missing")?, 0);

    let remaining = list_agents(&conn)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].agent_name, "Alpha");
    Ok(())
}
