use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, NewClockEvent};
use crate::models::event_type::EventKind;
use crate::models::location::Location;
use chrono::{DateTime, Local, SecondsFormat, SubsecRound, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "id, user_id, kind, timestamp, latitude, longitude";

/// Canonical on-disk form of an instant. Every stored timestamp uses it, so
/// lexical order of the column equals chronological order.
pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(
            2,
            AppError::InvalidEventKind(format!("Invalid kind: {}", kind_str)),
        )
    })?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(3, AppError::CorruptRecord(ts_str.clone())))?;

    Ok(ClockEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp,
        location: Location {
            latitude: row.get("latitude")?,
            longitude: row.get("longitude")?,
        },
    })
}

fn collect_events(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &NewClockEvent) -> AppResult<ClockEvent> {
    // stored with millisecond precision; hand back exactly what a reload sees
    let timestamp = ev.timestamp.trunc_subsecs(3);

    conn.execute(
        "INSERT INTO events (user_id, kind, timestamp, latitude, longitude, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.user_id,
            ev.kind.to_db_str(),
            ts_to_db(&timestamp),
            ev.location.latitude,
            ev.location.longitude,
            ev.source.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(ClockEvent {
        id: conn.last_insert_rowid(),
        user_id: ev.user_id,
        kind: ev.kind,
        timestamp,
        location: ev.location,
    })
}

/// Events of `user_id` with `from <= timestamp < to`, oldest first.
pub fn load_events_between(
    conn: &Connection,
    user_id: i64,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> AppResult<Vec<ClockEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1 AND timestamp >= ?2 AND timestamp < ?3
         ORDER BY timestamp ASC, id ASC"
    );
    collect_events(conn, &sql, params![user_id, ts_to_db(from), ts_to_db(to)])
}

pub fn load_events_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<ClockEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1
         ORDER BY timestamp ASC, id ASC"
    );
    collect_events(conn, &sql, params![user_id])
}

/// Greatest timestamp wins; ties go to the later insert.
pub fn load_last_event(conn: &Connection, user_id: i64) -> AppResult<Option<ClockEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE user_id = ?1
         ORDER BY timestamp DESC, id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row(params![user_id], map_row).optional()?)
}

pub fn event_exists(
    conn: &Connection,
    user_id: i64,
    kind: EventKind,
    timestamp: &DateTime<Utc>,
) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM events WHERE user_id = ?1 AND kind = ?2 AND timestamp = ?3 LIMIT 1",
    )?;
    Ok(stmt.exists(params![user_id, kind.to_db_str(), ts_to_db(timestamp)])?)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
}
