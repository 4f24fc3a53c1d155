//! Repository seam between the access layer and persistence.
//!
//! Stores are synchronous and owned by exactly one writer: the access layer
//! keeps them behind a mutex and calls them from the blocking pool.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::event::{ClockEvent, NewClockEvent};
use crate::models::event_type::EventKind;
use chrono::{DateTime, Utc};

/// Append-only storage of clock events.
pub trait ClockStore: Send + 'static {
    /// Append an event, assigning the next id.
    fn append(&mut self, event: NewClockEvent) -> AppResult<ClockEvent>;

    /// Events of `user_id` with `from <= timestamp < to`.
    fn events_between(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>>;

    fn all_events(&self, user_id: i64) -> AppResult<Vec<ClockEvent>>;

    /// The event with the greatest timestamp (ties: greatest id).
    fn last_event(&self, user_id: i64) -> AppResult<Option<ClockEvent>>;

    fn contains(&self, user_id: i64, kind: EventKind, timestamp: DateTime<Utc>) -> AppResult<bool>;

    fn is_empty(&self) -> AppResult<bool>;

    /// Run `f` as one unit: when it fails, nothing it appended stays.
    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        f(self)
    }

    /// Record an operation in the audit trail, if the store keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}
