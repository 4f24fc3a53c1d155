use crate::models::day_group::{DayGroup, DayStatus};
use crate::models::event::ClockEvent;
use crate::utils::colors::{GREEN, RED, RESET};

fn render_card(out: &mut String, title: &str, color: &str, event: Option<&ClockEvent>) {
    out.push_str(&format!("{color}{title}{RESET}\n"));
    match event {
        Some(ev) => {
            out.push_str(&format!("  Time:     {}\n", ev.time_hms()));
            out.push_str(&format!("  Position: {}\n", ev.location.display_short()));
            out.push_str(&format!("  Map:      {}\n", ev.location.map_link()));
        }
        None => out.push_str("  Data not available.\n"),
    }
}

/// Read-only view of one day.
pub fn render_detail(day: Option<&DayGroup>) -> String {
    let Some(day) = day else {
        return "No data selected.\n".to_string();
    };

    let mut out = String::new();
    out.push_str("Day detail\n");
    out.push_str(&format!("{}\n\n", day.date_key.format("%A %-d %B %Y")));

    render_card(&mut out, "Entry punch", GREEN, day.entry.as_ref());
    out.push('\n');
    render_card(&mut out, "Exit punch", RED, day.exit.as_ref());

    match (&day.total_duration, day.status) {
        (Some(total), _) => out.push_str(&format!("\nTotal hours: {}\n", total)),
        (None, DayStatus::Inverted) => {
            out.push_str("\nTotal hours: N/A (the exit precedes the entry)\n")
        }
        (None, _) => out.push_str("\nTotal hours: N/A\n"),
    }

    out
}
