pub mod app;
pub mod backup;
pub mod clock;
pub mod config;
pub mod detail;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod status;
pub mod timesheet;

use crate::api::{AccessLayer, Latency};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::seed::seed_sample_data;
use crate::errors::AppResult;
use crate::models::user::User;
use crate::store::SqliteStore;
use crate::utils::date::today;

/// Logged-in user plus the access layer opened on the configured database.
pub struct Session {
    pub api: AccessLayer<SqliteStore>,
    pub user: User,
}

/// Open the store and authenticate with the command-line or configured
/// credentials. The session lives as long as the command.
///
/// A database created by this open gets the sample punches, as `init` does.
pub async fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let mut store = SqliteStore::open(&cfg.database)?;
    if store.created() {
        seed_sample_data(&mut store, cfg.account.id, today())?;
    }
    let api = AccessLayer::new(store, cfg.account.clone(), Latency::from_config(cfg));

    let email = cli.email.as_deref().unwrap_or(&cfg.account.email);
    let password = cli.password.as_deref().unwrap_or(&cfg.account.password);
    let user = api.authenticate(email, password).await?;

    Ok(Session { api, user })
}
