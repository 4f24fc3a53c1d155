use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::screens::timesheet::TimesheetScreen;
use crate::utils::date::{parse_month, today};
use chrono::Datelike;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Timesheet { period } = &cli.command else {
        return Ok(());
    };

    let (year, month) = match period {
        Some(p) => parse_month(p).ok_or_else(|| AppError::InvalidPeriod(p.clone()))?,
        None => {
            let t = today();
            (t.year(), t.month())
        }
    };

    let session = open_session(cli, cfg).await?;
    let mut sheet = TimesheetScreen::new(session.user.id, year, month);
    sheet.load(&session.api).await?;
    print!("{}", sheet.render());
    Ok(())
}
