use super::{LocationError, Locator};
use crate::config::{LocationConfig, LocationSource};
use crate::models::location::Location;
use crate::utils::path::expand_tilde;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Always answers with the same coordinates (from `--lat/--lon` or config).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    location: Location,
}

impl FixedLocator {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl Locator for FixedLocator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send {
        let location = self.location;
        async move { Ok(location) }
    }
}

/// Reads the latest fix from a JSON document `{"latitude": .., "longitude": ..}`
/// kept up to date by an external positioning daemon.
#[derive(Debug, Clone)]
pub struct FileLocator {
    path: PathBuf,
}

impl FileLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Locator for FileLocator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send {
        let path = self.path.clone();
        async move {
            let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "cannot read position file");
                match e.kind() {
                    ErrorKind::NotFound => LocationError::PositionUnavailable,
                    ErrorKind::PermissionDenied => LocationError::PermissionDenied,
                    _ => LocationError::Unknown,
                }
            })?;

            serde_json::from_str::<Location>(&raw).map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "malformed position file");
                LocationError::Unknown
            })
        }
    }
}

/// No positioning capability on this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

impl Locator for NoLocator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send {
        async { Err(LocationError::Unsupported) }
    }
}

/// Locator selected at runtime from configuration or command-line flags.
#[derive(Debug, Clone)]
pub enum AnyLocator {
    Fixed(FixedLocator),
    File(FileLocator),
    None(NoLocator),
}

impl AnyLocator {
    pub fn from_config(cfg: &LocationConfig) -> Self {
        match cfg.source {
            LocationSource::Fixed => match (cfg.latitude, cfg.longitude) {
                (Some(lat), Some(lon)) => AnyLocator::Fixed(FixedLocator::new(Location::new(lat, lon))),
                _ => AnyLocator::None(NoLocator),
            },
            LocationSource::File => match &cfg.file {
                Some(path) => AnyLocator::File(FileLocator::new(expand_tilde(path))),
                None => AnyLocator::None(NoLocator),
            },
            LocationSource::None => AnyLocator::None(NoLocator),
        }
    }

    /// `--lat/--lon` on the command line win over the configured source.
    pub fn resolve(cfg: &LocationConfig, lat: Option<f64>, lon: Option<f64>) -> Self {
        match (lat, lon) {
            (Some(lat), Some(lon)) => AnyLocator::Fixed(FixedLocator::new(Location::new(lat, lon))),
            _ => Self::from_config(cfg),
        }
    }
}

impl Locator for AnyLocator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send {
        let this = self.clone();
        async move {
            match this {
                AnyLocator::Fixed(l) => l.locate().await,
                AnyLocator::File(l) => l.locate().await,
                AnyLocator::None(l) => l.locate().await,
            }
        }
    }
}
