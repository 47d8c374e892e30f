// Database schema: table creation and migrations.
//
// A `schema_version` table tracks which migrations have run. Each migration
// is a function that executes SQL statements, applied at most once.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent: safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per analyzed text
        CREATE TABLE IF NOT EXISTS analyses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            summary TEXT,
            sentiment TEXT,                    -- positive / neutral / negative
            topics TEXT,                       -- JSON array of strings
            keywords TEXT,                     -- JSON array of strings
            input_text TEXT NOT NULL,
            created_at TEXT NOT NULL           -- RFC 3339, UTC, millisecond precision
        );

        CREATE INDEX IF NOT EXISTS idx_analyses_title
            ON analyses(title);

        CREATE INDEX IF NOT EXISTS idx_analyses_sentiment
            ON analyses(sentiment);

        -- Search results and listings are newest first
        CREATE INDEX IF NOT EXISTS idx_analyses_created
            ON analyses(created_at);
        ",
    )
    .context("Failed to create database tables")?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
