use super::ClockStore;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::migrate::current_version;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::{ClockEvent, NewClockEvent};
use crate::models::event_type::EventKind;
use chrono::{DateTime, Utc};

/// Durable store backed by the `events` table.
pub struct SqliteStore {
    pool: DbPool,
    created: bool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        let created = current_version(&pool.conn)? == 0;
        init_db(&pool.conn)?;
        tracing::debug!(path, created, "sqlite store opened");
        Ok(Self { pool, created })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            created: true,
        })
    }

    /// True when this open created the schema (first use of the file).
    pub fn created(&self) -> bool {
        self.created
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl ClockStore for SqliteStore {
    fn append(&mut self, event: NewClockEvent) -> AppResult<ClockEvent> {
        let ev = queries::insert_event(&self.pool.conn, &event)?;
        tracing::debug!(id = ev.id, user_id = ev.user_id, kind = %ev.kind, "event appended");
        Ok(ev)
    }

    fn events_between(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>> {
        queries::load_events_between(&self.pool.conn, user_id, &from, &to)
    }

    fn all_events(&self, user_id: i64) -> AppResult<Vec<ClockEvent>> {
        queries::load_events_for_user(&self.pool.conn, user_id)
    }

    fn last_event(&self, user_id: i64) -> AppResult<Option<ClockEvent>> {
        queries::load_last_event(&self.pool.conn, user_id)
    }

    fn contains(&self, user_id: i64, kind: EventKind, timestamp: DateTime<Utc>) -> AppResult<bool> {
        queries::event_exists(&self.pool.conn, user_id, kind, &timestamp)
    }

    fn is_empty(&self) -> AppResult<bool> {
        Ok(queries::count_events(&self.pool.conn)? == 0)
    }

    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        self.pool.conn.execute_batch("BEGIN;")?;
        match f(self) {
            Ok(value) => {
                self.pool.conn.execute_batch("COMMIT;")?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rb) = self.pool.conn.execute_batch("ROLLBACK;") {
                    tracing::warn!(error = %rb, "rollback failed");
                }
                Err(e)
            }
        }
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }
}
