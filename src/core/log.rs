use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock" => Colour::Green,
        "import" => Colour::Cyan,
        "seed" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per entry, oldest first.
    pub fn render(entries: &[LogEntry]) -> String {
        if entries.is_empty() {
            return "📜 Internal log is empty.\n".to_string();
        }

        let formatted: Vec<(String, String, &LogEntry)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (date, op_target, e)
            })
            .collect();

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = formatted.iter().map(|(d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = formatted
            .iter()
            .map(|(_, op, _)| op.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);

        let mut out = String::from("📜 Internal log:\n\n");

        for (date, op_target, entry) in formatted {
            let visible: String = if op_target.chars().count() > OP_WIDTH_LIMIT {
                let mut s: String = op_target.chars().take(OP_WIDTH_LIMIT - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let color = color_for_operation(&entry.operation);
            let painted = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                entry.id,
                date,
                painted,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        out
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        print!("{}", Self::render(&entries));
        Ok(())
    }
}
