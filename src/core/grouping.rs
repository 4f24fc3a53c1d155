//! Day grouping: turns an unordered list of punches into one entry/exit pair
//! per calendar day.

use crate::models::day_group::{DayGroup, DayStatus};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventKind;
use crate::utils::format_duration;
use chrono::{Duration, Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

#[derive(Default)]
struct Slot {
    entry: Option<ClockEvent>,
    exit: Option<ClockEvent>,
}

/// Group events by local calendar day. See [`group_by_day_in`].
pub fn group_by_day(events: &[ClockEvent]) -> Vec<DayGroup> {
    group_by_day_in(events, &Local)
}

/// Group events by calendar day in `tz`, most recent day first.
///
/// - the first IN of a day is its entry; later INs are ignored
/// - every OUT overwrites the day's exit, so the last OUT wins
/// - the duration is `exit - entry`, present only when both exist and the
///   exit does not precede the entry
pub fn group_by_day_in<Tz: TimeZone>(events: &[ClockEvent], tz: &Tz) -> Vec<DayGroup> {
    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    let mut days: BTreeMap<NaiveDate, Slot> = BTreeMap::new();

    for ev in sorted {
        let key = ev.timestamp.with_timezone(tz).date_naive();
        let slot = days.entry(key).or_default();

        match ev.kind {
            EventKind::In => {
                if slot.entry.is_none() {
                    slot.entry = Some(ev.clone());
                }
            }
            EventKind::Out => slot.exit = Some(ev.clone()),
        }
    }

    days.into_iter()
        .rev()
        .map(|(date_key, slot)| build_group(date_key, slot))
        .collect()
}

fn build_group(date_key: NaiveDate, slot: Slot) -> DayGroup {
    let (status, worked) = match (&slot.entry, &slot.exit) {
        (Some(entry), Some(exit)) => {
            let diff = exit.timestamp - entry.timestamp;
            if diff < Duration::zero() {
                (DayStatus::Inverted, None)
            } else {
                (DayStatus::Complete, Some(diff))
            }
        }
        (Some(_), None) => (DayStatus::MissingExit, None),
        // a slot only exists because an event landed in it, so no entry
        // means there is an exit
        (None, _) => (DayStatus::MissingEntry, None),
    };

    DayGroup {
        date_key,
        entry: slot.entry,
        exit: slot.exit,
        total_duration: worked.map(format_duration),
        worked,
        status,
    }
}

/// Totals shown under a month of day groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub days: usize,
    pub complete_days: usize,
    pub total_worked: Duration,
}

impl MonthSummary {
    pub fn total_str(&self) -> String {
        format_duration(self.total_worked)
    }
}

pub fn summarize_month(groups: &[DayGroup]) -> MonthSummary {
    MonthSummary {
        days: groups.len(),
        complete_days: groups.iter().filter(|g| g.is_complete()).count(),
        total_worked: groups
            .iter()
            .filter_map(|g| g.worked)
            .fold(Duration::zero(), |acc, d| acc + d),
    }
}
