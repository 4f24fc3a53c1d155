use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::screens::home::HomeScreen;

/// Render the home screen once.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg).await?;
    let mut home = HomeScreen::new(session.user.clone());
    home.refresh(&session.api).await?;
    print!("{}", home.render());
    Ok(())
}
