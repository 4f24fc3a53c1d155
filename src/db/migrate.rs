//! Versioned schema migrations.
//!
//! Each migration runs once, inside its own transaction, and is recorded
//! both in `schema_version` and as a `migration_applied` line in `log`.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_events",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('in','out')),
            timestamp   TEXT NOT NULL,
            latitude    REAL NOT NULL,
            longitude   REAL NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_user_ts ON events(user_id, timestamp);
        "#,
    },
    Migration {
        version: 3,
        name: "add_event_source",
        sql: r#"
        ALTER TABLE events
            ADD COLUMN source TEXT NOT NULL DEFAULT 'app'
            CHECK(source IN ('app','seed','import'));
        "#,
    },
];

fn ensure_version_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Highest applied migration, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> AppResult<i64> {
    ensure_version_table(conn)?;
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

/// Latest schema version this build knows about.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = current_version(conn)?;
    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build (v{})",
            current,
            latest_version()
        )));
    }

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        tracing::info!(version = m.version, name = m.name, "applying migration");

        let apply = || -> AppResult<()> {
            conn.execute_batch("BEGIN;")?;
            conn.execute_batch(m.sql)?;
            conn.execute(
                "INSERT INTO schema_version (version, name, applied_at)
                 VALUES (?1, ?2, datetime('now'))",
                rusqlite::params![m.version, m.name],
            )?;
            ttlog(
                conn,
                "migration_applied",
                &format!("v{}", m.version),
                m.name,
            )?;
            conn.execute_batch("COMMIT;")?;
            Ok(())
        };

        if let Err(e) = apply() {
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(AppError::Migration(format!(
                "migration v{} ({}) failed: {}",
                m.version, m.name, e
            )));
        }
    }

    Ok(())
}
