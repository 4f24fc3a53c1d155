use crate::api::AccessLayer;
use crate::core::grouping::{group_by_day, summarize_month};
use crate::errors::AppResult;
use crate::models::day_group::{DayGroup, DayStatus};
use crate::store::ClockStore;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::date::shift_month;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// One month of day groups, most recent day first.
#[derive(Debug, Clone)]
pub struct TimesheetScreen {
    user_id: i64,
    year: i32,
    month: u32,
    days: Vec<DayGroup>,
}

impl TimesheetScreen {
    pub fn new(user_id: i64, year: i32, month: u32) -> Self {
        Self {
            user_id,
            year,
            month,
            days: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    /// 1-based, as shown on screen.
    pub fn day(&self, number: usize) -> Option<&DayGroup> {
        number.checked_sub(1).and_then(|i| self.days.get(i))
    }

    pub fn find(&self, date: NaiveDate) -> Option<&DayGroup> {
        self.days.iter().find(|d| d.date_key == date)
    }

    /// Fetch the month and regroup it.
    pub async fn load<S: ClockStore>(&mut self, api: &AccessLayer<S>) -> AppResult<()> {
        let events = api.list_events(self.user_id, self.month, self.year).await?;
        self.days = group_by_day(&events);
        Ok(())
    }

    /// Move the page; the caller reloads.
    pub fn shift(&mut self, offset: i32) {
        let (y, m) = shift_month(self.year, self.month, offset);
        self.year = y;
        self.month = m;
        self.days.clear();
    }

    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month))
    }

    pub fn render(&self) -> String {
        let mut out = format!("<  {}  >\n\n", self.title());

        if self.days.is_empty() {
            out.push_str("No punches\n");
            out.push_str("There is no data for the selected month.\n");
            return out;
        }

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("Day", 22),
            Column::new("Entry", 7),
            Column::new("Exit", 7),
            Column::new("Total hours", 12),
        ]);

        for (i, day) in self.days.iter().enumerate() {
            let entry = day
                .entry
                .as_ref()
                .map(|e| e.time_hm())
                .unwrap_or_else(|| "--:--".to_string());
            let exit = day
                .exit
                .as_ref()
                .map(|e| e.time_hm())
                .unwrap_or_else(|| "--:--".to_string());
            let total = match (&day.total_duration, day.status) {
                (Some(t), _) => t.clone(),
                (None, DayStatus::Inverted) => "N/A (exit before entry)".to_string(),
                (None, _) => "N/A".to_string(),
            };

            table.add_row(vec![
                (i + 1).to_string(),
                day.date_key.format("%A %-d %B").to_string(),
                colorize_in_out(&entry, true),
                colorize_in_out(&exit, false),
                colorize_optional(&total),
            ]);
        }

        out.push_str(&table.render());

        let summary = summarize_month(&self.days);
        out.push_str(&format!(
            "\n{} days, {} complete, worked {}\n",
            summary.days,
            summary.complete_days,
            summary.total_str()
        ));

        out
    }
}
