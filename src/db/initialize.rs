use crate::db::migrate::{current_version, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a connection: lock wait, then every pending migration.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    // `app` and one-shot commands may share the file
    conn.busy_timeout(Duration::from_secs(5))?;

    run_pending_migrations(conn)?;
    tracing::debug!(version = current_version(conn)?, "schema ready");
    Ok(())
}
