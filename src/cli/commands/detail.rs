use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::screens::detail::render_detail;
use crate::screens::timesheet::TimesheetScreen;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::Datelike;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Detail { date } = &cli.command else {
        return Ok(());
    };

    let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

    let session = open_session(cli, cfg).await?;
    let mut sheet = TimesheetScreen::new(session.user.id, day.year(), day.month());
    sheet.load(&session.api).await?;

    let group = sheet.find(day);
    if group.is_none() {
        warning(format!("No punches recorded on {}", day));
    }
    print!("{}", render_detail(group));
    Ok(())
}
