use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = &cli.command {
        let session = open_session(cli, cfg).await?;
        let report = ImportLogic::import_file(&session.api, session.user.id, Path::new(file)).await?;

        success(format!("Imported {} punches from {}", report.imported, file));
        if report.duplicates > 0 {
            info(format!("Skipped {} punches already present", report.duplicates));
        }
        if report.foreign > 0 {
            info(format!("Skipped {} punches of other users", report.foreign));
        }
    }
    Ok(())
}
