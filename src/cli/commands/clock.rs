use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::location::AnyLocator;
use crate::screens::home::HomeScreen;
use crate::ui::messages::success;

/// Toggle the punch: IN when not in service, OUT otherwise.
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Clock { lat, lon } = &cli.command else {
        return Ok(());
    };

    let session = open_session(cli, cfg).await?;
    let locator = AnyLocator::resolve(&cfg.location, *lat, *lon);

    let mut home = HomeScreen::new(session.user.clone());
    home.refresh(&session.api).await?;

    let ev = home
        .clock_action(&session.api, &locator, cfg.location_timeout())
        .await?;

    success(format!(
        "{} recorded at {} ({})",
        ev.kind.label(),
        ev.time_hm(),
        ev.location.display_short()
    ));
    print!("\n{}", home.render());
    Ok(())
}
