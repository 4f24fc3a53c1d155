use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log;
use crate::db::seed::seed_sample_data;
use crate::errors::AppResult;
use crate::store::{ClockStore, SqliteStore};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::today;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the sample punches, unless `--no-seed`
pub fn handle(cli: &Cli, base: &Config) -> AppResult<()> {
    let Commands::Init { no_seed } = &cli.command else {
        return Ok(());
    };

    let fresh = Config::init_all(cli.db.as_deref(), cli.test)?;
    let cfg = if cli.test {
        Config {
            database: fresh.database.clone(),
            ..base.clone()
        }
    } else {
        fresh
    };

    info("Initializing GeoTimbra…");
    let mut store = SqliteStore::open(&cfg.database)?;
    success(format!("Database initialized at {}", &cfg.database));

    if let Err(e) = log::ttlog(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    if !*no_seed {
        let inserted = seed_sample_data(&mut store, cfg.account.id, today())?;
        if inserted > 0 {
            success(format!("Inserted {} sample punches", inserted));
        } else if !store.is_empty()? {
            info("Existing punches found, sample data skipped");
        }
    }

    success("GeoTimbra initialization completed!");
    Ok(())
}
