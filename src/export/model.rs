// src/export/model.rs

use crate::models::event::ClockEvent;
use serde::Serialize;

/// Flat row for CSV export. Local date/time columns are added for
/// spreadsheet users; `timestamp` stays the UTC instant.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub timestamp: String,
    pub local_date: String,
    pub local_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&ClockEvent> for EventExport {
    fn from(ev: &ClockEvent) -> Self {
        let local = ev.local_timestamp();
        Self {
            id: ev.id,
            user_id: ev.user_id,
            kind: ev.kind.as_str().to_string(),
            timestamp: ev.timestamp_str(),
            local_date: local.format("%Y-%m-%d").to_string(),
            local_time: local.format("%H:%M:%S").to_string(),
            latitude: ev.location.latitude,
            longitude: ev.location.longitude,
        }
    }
}
