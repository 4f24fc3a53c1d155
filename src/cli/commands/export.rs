use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = &cli.command
    {
        let session = open_session(cli, cfg).await?;
        let events = session.api.all_events(session.user.id).await?;
        let events = ExportLogic::filter_period(events, period.as_deref())?;
        ExportLogic::export(&events, *format, file, *force)?;
    }
    Ok(())
}
