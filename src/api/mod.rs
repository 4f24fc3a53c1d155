//! Access layer: the asynchronous surface the screens talk to.
//!
//! Every call waits for a fixed simulated round-trip, then runs its store
//! operation under the store mutex on the blocking pool. The mutex makes the
//! store single-writer; `record_event` checks and appends inside one
//! critical section.

use crate::config::{Account, Config};
use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, EventSource, NewClockEvent};
use crate::models::event_type::EventKind;
use crate::models::location::Location;
use crate::models::user::User;
use crate::store::ClockStore;
use crate::utils::date::{local_midnight_utc, month_bounds};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Simulated network round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// authenticate, list, record, import
    pub call: Duration,
    /// most recent event lookup
    pub status: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            call: Duration::ZERO,
            status: Duration::ZERO,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            call: cfg.latency(),
            status: cfg.status_latency(),
        }
    }
}

/// Outcome of [`AccessLayer::import_events`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub duplicates: usize,
    pub foreign: usize,
}

pub struct AccessLayer<S: ClockStore> {
    store: Arc<Mutex<S>>,
    account: Account,
    latency: Latency,
}

impl<S: ClockStore> Clone for AccessLayer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            account: self.account.clone(),
            latency: self.latency,
        }
    }
}

impl<S: ClockStore> AccessLayer<S> {
    pub fn new(store: S, account: Account, latency: Latency) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            account,
            latency,
        }
    }

    async fn delay(d: Duration) {
        if !d.is_zero() {
            tokio::time::sleep(d).await;
        }
    }

    /// Run `f` with exclusive access to the store without blocking the caller's task.
    async fn with_store<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut S) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            let mut guard = store
                .lock()
                .map_err(|_| AppError::Other("event store lock poisoned".into()))?;
            f(&mut guard)
        })
        .await?
    }

    /// Check the credentials against the configured account.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        Self::delay(self.latency.call).await;

        let email_matches = email.trim().eq_ignore_ascii_case(self.account.email.trim());
        if !email_matches || password != self.account.password {
            tracing::warn!(email, "authentication failed");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = self.account.id, "user authenticated");
        Ok(User {
            id: self.account.id,
            name: self.account.name.clone(),
            email: self.account.email.clone(),
        })
    }

    /// Events of `user_id` whose local timestamp falls in `month` (1-12) of `year`.
    pub async fn list_events(&self, user_id: i64, month: u32, year: i32) -> AppResult<Vec<ClockEvent>> {
        let (first, next) = month_bounds(year, month)
            .ok_or_else(|| AppError::InvalidPeriod(format!("{:04}-{:02}", year, month)))?;
        let from = local_midnight_utc(first);
        let to = local_midnight_utc(next);

        Self::delay(self.latency.call).await;

        let events = self
            .with_store(move |s| s.events_between(user_id, from, to))
            .await?;
        tracing::debug!(user_id, year, month, count = events.len(), "events listed");
        Ok(events)
    }

    /// Append a punch stamped with the current time.
    ///
    /// Rejected when it would repeat the kind of the user's most recent punch,
    /// or when it is an exit with nothing to close.
    pub async fn record_event(
        &self,
        user_id: i64,
        kind: EventKind,
        location: Location,
    ) -> AppResult<ClockEvent> {
        Self::delay(self.latency.call).await;

        let ev = self
            .with_store(move |s| {
                match (s.last_event(user_id)?, kind) {
                    (Some(last), k) if last.kind == k => return Err(AppError::DuplicateClock(k)),
                    (None, EventKind::Out) => return Err(AppError::NotClockedIn),
                    _ => {}
                }

                let ev = s.append(NewClockEvent {
                    user_id,
                    kind,
                    timestamp: Utc::now(),
                    location,
                    source: EventSource::App,
                })?;
                // stored from here on; audit failures are only logged
                let note = format!(
                    "#{} user {} at {} ({})",
                    ev.id,
                    user_id,
                    ev.timestamp_str(),
                    location.display_short()
                );
                if let Err(e) = s.audit("clock", kind.as_str(), &note) {
                    tracing::warn!(error = %e, id = ev.id, "audit write failed");
                }
                Ok(ev)
            })
            .await?;

        tracing::info!(id = ev.id, user_id, kind = %kind, "punch recorded");
        Ok(ev)
    }

    pub async fn most_recent_event(&self, user_id: i64) -> AppResult<Option<ClockEvent>> {
        Self::delay(self.latency.status).await;
        self.with_store(move |s| s.last_event(user_id)).await
    }

    /// Every event of the user, oldest first.
    pub async fn all_events(&self, user_id: i64) -> AppResult<Vec<ClockEvent>> {
        Self::delay(self.latency.call).await;
        let mut events = self.with_store(move |s| s.all_events(user_id)).await?;
        events.sort_by_key(|e| (e.timestamp, e.id));
        Ok(events)
    }

    /// Append events read from an interchange document, keeping their
    /// timestamps. Events of other users and events already stored (same
    /// kind and instant) are skipped. Ids are reassigned by the store.
    /// Either every accepted event is appended or none is.
    pub async fn import_events(
        &self,
        user_id: i64,
        mut events: Vec<ClockEvent>,
    ) -> AppResult<ImportReport> {
        Self::delay(self.latency.call).await;

        events.sort_by_key(|e| (e.timestamp, e.id));

        let report = self
            .with_store(move |s| {
                let report = s.atomically(|s| {
                    let mut report = ImportReport::default();
                    for ev in &events {
                        if ev.user_id != user_id {
                            report.foreign += 1;
                            continue;
                        }
                        if s.contains(user_id, ev.kind, ev.timestamp)? {
                            report.duplicates += 1;
                            continue;
                        }
                        s.append(NewClockEvent::imported(ev))?;
                        report.imported += 1;
                    }
                    Ok(report)
                })?;

                let note = format!(
                    "{} imported, {} duplicates, {} foreign",
                    report.imported, report.duplicates, report.foreign
                );
                if let Err(e) = s.audit("import", &format!("user {}", user_id), &note) {
                    tracing::warn!(error = %e, user_id, "audit write failed");
                }
                Ok(report)
            })
            .await?;

        tracing::info!(user_id, ?report, "events imported");
        Ok(report)
    }
}
