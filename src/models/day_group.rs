use super::event::ClockEvent;
use chrono::{Duration, NaiveDate};

/// How the entry/exit pair of a day relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Entry and exit present, exit not before entry.
    Complete,
    /// Only an entry (still in service or forgot to clock out).
    MissingExit,
    /// Only an exit.
    MissingEntry,
    /// Exit precedes entry: clock skew or bad data, no duration is computed.
    Inverted,
}

/// Per-day view of a user's punches. Derived on every render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date_key: NaiveDate,
    pub entry: Option<ClockEvent>,
    pub exit: Option<ClockEvent>,
    pub total_duration: Option<String>,
    pub worked: Option<Duration>,
    pub status: DayStatus,
}

impl DayGroup {
    pub fn is_complete(&self) -> bool {
        self.status == DayStatus::Complete
    }
}
