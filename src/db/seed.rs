//! Sample data written the first time a store is used.

use crate::errors::AppResult;
use crate::models::event::{EventSource, NewClockEvent};
use crate::models::event_type::EventKind;
use crate::models::location::Location;
use crate::store::ClockStore;
use crate::utils::date::local_to_utc;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Two complete working days before `today`: yesterday 09:01:15-18:02:30 and
/// the day before 08:55:10-17:30:05 (local time).
///
/// Does nothing and returns 0 when the store already holds events.
pub fn seed_sample_data<S: ClockStore>(
    store: &mut S,
    user_id: i64,
    today: NaiveDate,
) -> AppResult<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }

    let yesterday = today - Duration::days(1);
    let two_days_ago = today - Duration::days(2);

    let samples = [
        (yesterday, (9, 1, 15), EventKind::In, Location::new(45.4642, 9.1900)),
        (yesterday, (18, 2, 30), EventKind::Out, Location::new(45.4642, 9.1900)),
        (two_days_ago, (8, 55, 10), EventKind::In, Location::new(45.4650, 9.1910)),
        (two_days_ago, (17, 30, 5), EventKind::Out, Location::new(45.4655, 9.1915)),
    ];

    store.atomically(|store| {
        for (day, (h, m, s), kind, location) in samples {
            let time = NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN);
            store.append(NewClockEvent {
                user_id,
                kind,
                timestamp: local_to_utc(day.and_time(time)),
                location,
                source: EventSource::Seed,
            })?;
        }

        store.audit(
            "seed",
            &format!("user {}", user_id),
            &format!("Inserted {} sample events", samples.len()),
        )
    })?;
    tracing::info!(user_id, count = samples.len(), "sample data seeded");

    Ok(samples.len())
}
