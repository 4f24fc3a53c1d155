use crate::api::{AccessLayer, ImportReport};
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::store::ClockStore;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Parse an interchange document: a JSON array of clock events, as kept
    /// by the browser client under its `timbrature` key.
    pub fn parse(raw: &str) -> AppResult<Vec<ClockEvent>> {
        let events: Vec<ClockEvent> = serde_json::from_str(raw)?;
        if let Some(bad) = events.iter().find(|e| !e.location.is_valid()) {
            return Err(AppError::CorruptRecord(format!(
                "event {} has out-of-range coordinates",
                bad.id
            )));
        }
        Ok(events)
    }

    pub async fn import_file<S: ClockStore>(
        api: &AccessLayer<S>,
        user_id: i64,
        path: &Path,
    ) -> AppResult<ImportReport> {
        let raw = tokio::fs::read_to_string(path).await?;
        let events = Self::parse(&raw)?;
        api.import_events(user_id, events).await
    }
}
