use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The single account known to the access layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Mario Rossi".to_string(),
            email: "utente@test.com".to_string(),
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Fixed,
    File,
    #[default]
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSource,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Position document for `source: file`.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSource::None,
            latitude: None,
            longitude: None,
            file: None,
            timeout_secs: default_location_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub account: Account,
    /// Simulated round-trip of list/record calls.
    #[serde(default = "default_latency")]
    pub latency_ms: u64,
    /// Simulated round-trip of the status lookup.
    #[serde(default = "default_status_latency")]
    pub status_latency_ms: u64,
    #[serde(default)]
    pub location: LocationConfig,
}

fn default_latency() -> u64 {
    500
}
fn default_status_latency() -> u64 {
    300
}
fn default_location_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            account: Account::default(),
            latency_ms: default_latency(),
            status_latency_ms: default_status_latency(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("geotimbra")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".geotimbra")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geotimbra.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("geotimbra.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    pub fn latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.latency_ms)
    }

    pub fn status_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.status_latency_ms)
    }

    pub fn location_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.location.timeout_secs)
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` is used as given (after `~` expansion), like `--db` on
    /// every other command. In test mode the configuration file is left
    /// untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => crate::utils::path::expand_tilde(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
