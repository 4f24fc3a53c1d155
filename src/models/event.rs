use super::{event_type::EventKind, location::Location};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single punch ("timbratura").
///
/// Serialized in the interchange shape shared with the browser client:
/// `{id, userId, kind, timestamp, location}`. The legacy field name `type`
/// is accepted for `kind` when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEvent {
    pub id: i64,
    pub user_id: i64,
    #[serde(alias = "type")]
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub location: Location,
}

/// Where an event entered the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// A clock action.
    App,
    /// Sample data written on first use.
    Seed,
    /// Loaded from an interchange document.
    Import,
}

impl EventSource {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventSource::App => "app",
            EventSource::Seed => "seed",
            EventSource::Import => "import",
        }
    }
}

/// Payload handed to a store append; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClockEvent {
    pub user_id: i64,
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub location: Location,
    pub source: EventSource,
}

impl ClockEvent {
    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local_timestamp().date_naive()
    }

    /// RFC 3339 UTC with millisecond precision, the on-disk format.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// "HH:MM" in local time.
    pub fn time_hm(&self) -> String {
        self.local_timestamp().format("%H:%M").to_string()
    }

    /// "HH:MM:SS" in local time.
    pub fn time_hms(&self) -> String {
        self.local_timestamp().format("%H:%M:%S").to_string()
    }
}

impl NewClockEvent {
    /// Re-append an event read from an interchange document.
    pub fn imported(ev: &ClockEvent) -> Self {
        Self {
            user_id: ev.user_id,
            kind: ev.kind,
            timestamp: ev.timestamp,
            location: ev.location,
            source: EventSource::Import,
        }
    }
}
