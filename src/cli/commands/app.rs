use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::location::AnyLocator;
use crate::screens::app::{App, run_app};
use tokio::io::BufReader;

/// Interactive session over stdin/stdout.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg).await?;
    let locator = AnyLocator::from_config(&cfg.location);

    let mut app = App::start(session.api, session.user, locator, cfg.location_timeout()).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_app(&mut app, stdin, &mut stdout).await
}
