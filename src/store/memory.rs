use super::ClockStore;
use crate::errors::AppResult;
use crate::models::event::{ClockEvent, NewClockEvent};
use crate::models::event_type::EventKind;
use chrono::{DateTime, SubsecRound, Utc};

/// Volatile store: a plain vector in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<ClockEvent>,
    next_id: i64,
    audit: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit lines written so far as (operation, target, message).
    pub fn audit_trail(&self) -> &[(String, String, String)] {
        &self.audit
    }

    fn for_user(&self, user_id: i64) -> impl Iterator<Item = &ClockEvent> {
        self.events.iter().filter(move |e| e.user_id == user_id)
    }
}

impl ClockStore for MemoryStore {
    fn append(&mut self, event: NewClockEvent) -> AppResult<ClockEvent> {
        self.next_id += 1;
        let ev = ClockEvent {
            id: self.next_id,
            user_id: event.user_id,
            kind: event.kind,
            timestamp: event.timestamp.trunc_subsecs(3),
            location: event.location,
        };
        self.events.push(ev.clone());
        Ok(ev)
    }

    fn events_between(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>> {
        Ok(self
            .for_user(user_id)
            .filter(|e| e.timestamp >= from && e.timestamp < to)
            .cloned()
            .collect())
    }

    fn all_events(&self, user_id: i64) -> AppResult<Vec<ClockEvent>> {
        Ok(self.for_user(user_id).cloned().collect())
    }

    fn last_event(&self, user_id: i64) -> AppResult<Option<ClockEvent>> {
        Ok(self
            .for_user(user_id)
            .max_by_key(|e| (e.timestamp, e.id))
            .cloned())
    }

    fn contains(&self, user_id: i64, kind: EventKind, timestamp: DateTime<Utc>) -> AppResult<bool> {
        let timestamp = timestamp.trunc_subsecs(3);
        Ok(self
            .for_user(user_id)
            .any(|e| e.kind == kind && e.timestamp == timestamp))
    }

    fn is_empty(&self) -> AppResult<bool> {
        Ok(self.events.is_empty())
    }

    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        let (events, next_id, audit) = (self.events.len(), self.next_id, self.audit.len());
        let result = f(self);
        if result.is_err() {
            self.events.truncate(events);
            self.next_id = next_id;
            self.audit.truncate(audit);
        }
        result
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit
            .push((operation.to_string(), target.to_string(), message.to_string()));
        Ok(())
    }
}
