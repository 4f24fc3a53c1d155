use geotimbra::config::{LocationConfig, LocationSource};
use geotimbra::location::{
    AnyLocator, DEFAULT_TIMEOUT, FileLocator, FixedLocator, LocationError, Locator, NoLocator,
    capture,
};
use geotimbra::models::location::Location;
use std::future::Future;
use std::time::Duration;

mod common;
use common::{milan, temp_out};

/// Never answers within any reasonable timeout.
struct SlowLocator;

impl Locator for SlowLocator {
    fn locate(&self) -> impl Future<Output = Result<Location, LocationError>> + Send {
        async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Location::new(0.0, 0.0))
        }
    }
}

#[tokio::test]
async fn test_fixed_locator() {
    let loc = capture(&FixedLocator::new(milan()), DEFAULT_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(loc, milan());
}

#[tokio::test]
async fn test_no_locator_is_unsupported() {
    let err = capture(&NoLocator, DEFAULT_TIMEOUT).await.unwrap_err();
    assert_eq!(err, LocationError::Unsupported);
    assert_eq!(err.to_string(), "Geolocation is not supported on this device.");
}

#[tokio::test]
async fn test_timeout() {
    let err = capture(&SlowLocator, Duration::from_millis(20))
        .await
        .unwrap_err();
    assert_eq!(err, LocationError::Timeout);
    assert_eq!(err.to_string(), "The geolocation request timed out.");
}

#[tokio::test]
async fn test_out_of_range_fix_is_unavailable() {
    let err = capture(&FixedLocator::new(Location::new(91.0, 0.0)), DEFAULT_TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err, LocationError::PositionUnavailable);
}

#[tokio::test]
async fn test_file_locator() {
    let path = temp_out("position_ok", "json");
    std::fs::write(&path, r#"{"latitude": 41.9028, "longitude": 12.4964}"#).unwrap();

    let loc = capture(&FileLocator::new(&path), DEFAULT_TIMEOUT).await.unwrap();
    assert_eq!(loc, Location::new(41.9028, 12.4964));
}

#[tokio::test]
async fn test_file_locator_errors() {
    let missing = temp_out("position_missing", "json");
    let err = capture(&FileLocator::new(&missing), DEFAULT_TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err, LocationError::PositionUnavailable);

    let garbage = temp_out("position_garbage", "json");
    std::fs::write(&garbage, "not json").unwrap();
    let err = capture(&FileLocator::new(&garbage), DEFAULT_TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err, LocationError::Unknown);
    assert_eq!(err.to_string(), "Unable to retrieve the position.");
}

#[tokio::test]
async fn test_command_line_coordinates_win() {
    let cfg = LocationConfig {
        source: LocationSource::Fixed,
        latitude: Some(1.0),
        longitude: Some(2.0),
        ..LocationConfig::default()
    };

    let from_cfg = AnyLocator::resolve(&cfg, None, None);
    assert_eq!(from_cfg.locate().await.unwrap(), Location::new(1.0, 2.0));

    let from_cli = AnyLocator::resolve(&cfg, Some(45.4642), Some(9.19));
    assert_eq!(from_cli.locate().await.unwrap(), milan());
}

#[tokio::test]
async fn test_incomplete_fixed_config_has_no_locator() {
    let cfg = LocationConfig {
        source: LocationSource::Fixed,
        latitude: Some(1.0),
        ..LocationConfig::default()
    };
    let err = AnyLocator::from_config(&cfg).locate().await.unwrap_err();
    assert_eq!(err, LocationError::Unsupported);

    let err = AnyLocator::from_config(&LocationConfig::default())
        .locate()
        .await
        .unwrap_err();
    assert_eq!(err, LocationError::Unsupported);
}

#[test]
fn test_location_helpers() {
    let loc = milan();
    assert!(loc.is_valid());
    assert_eq!(loc.display_short(), "45.4642, 9.1900");
    assert_eq!(loc.map_link(), "https://www.google.com/maps?q=45.4642,9.19");
    assert!(!Location::new(f64::NAN, 0.0).is_valid());
    assert!(!Location::new(0.0, 180.5).is_valid());
}
