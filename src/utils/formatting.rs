//! Formatting utilities used for screen and export outputs.

use chrono::Duration;

/// Worked time as "<H>h <M>m", whole hours and minutes truncated.
/// "8h 1m", "0h 59m". Negative durations keep a leading sign.
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{}h {}m", sign, m / 60, m % 60)
}
