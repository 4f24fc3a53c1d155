// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::event::ClockEvent;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Keep the events whose local date falls in `period`.
    ///
    /// `period`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and
    /// `start:end` ranges of those.
    pub fn filter_period(events: Vec<ClockEvent>, period: Option<&str>) -> AppResult<Vec<ClockEvent>> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p).map_err(AppError::InvalidPeriod)?),
        };

        Ok(match bounds {
            None => events,
            Some((from, to)) => events
                .into_iter()
                .filter(|e| {
                    let d = e.local_date();
                    d >= from && d <= to
                })
                .collect(),
        })
    }

    /// Write `events` to `file` in `format`.
    pub fn export(
        events: &[ClockEvent],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if events.is_empty() {
            warning("No events match the selected period; writing an empty export.");
        }

        tracing::info!(format = format.as_str(), file, count = events.len(), "exporting events");

        match format {
            ExportFormat::Json => export_json(events, path),
            ExportFormat::Csv => export_csv(events, path),
        }
    }
}
