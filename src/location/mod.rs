//! One-shot location capture.
//!
//! A [`Locator`] produces a single fix; [`capture`] bounds it with a timeout
//! and validates the coordinates. There is no retry and no cached fix: every
//! clock action asks again.

mod sources;

pub use sources::{AnyLocator, FileLocator, FixedLocator, NoLocator};

use crate::models::location::Location;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Default upper bound for a single fix.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a fix could not be obtained. The display text is the message shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported on this device.")]
    Unsupported,

    #[error("The user denied the geolocation request.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("The geolocation request timed out.")]
    Timeout,

    #[error("Unable to retrieve the position.")]
    Unknown,
}

/// A source of position fixes.
pub trait Locator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Request one fix from `locator`, giving up after `timeout`.
pub async fn capture<L: Locator + Sync>(
    locator: &L,
    timeout: Duration,
) -> Result<Location, LocationError> {
    let location = match tokio::time::timeout(timeout, locator.locate()).await {
        Ok(result) => result?,
        Err(_) => {
            tracing::warn!(?timeout, "location request timed out");
            return Err(LocationError::Timeout);
        }
    };

    if !location.is_valid() {
        tracing::warn!(?location, "locator returned out-of-range coordinates");
        return Err(LocationError::PositionUnavailable);
    }

    tracing::debug!(
        latitude = location.latitude,
        longitude = location.longitude,
        "location captured"
    );
    Ok(location)
}
