use caretrack_logic::{
    AccuracyHint, LocationProvider, LocationReading, PermissionStatus, prelude::*,
};
use tauri::{AppHandle, plugin::PermissionState};
use tauri_plugin_geolocation::{GeolocationExt, PermissionType, Position, PositionOptions};

/// [LocationProvider] backed by the device's geolocation plugin.
pub struct TauriLocationProvider(AppHandle);

impl TauriLocationProvider {
    pub fn new(app: AppHandle) -> Self {
        Self(app)
    }
}

/// 10s timeout, never serve a cached fix; high accuracy only when asked.
fn position_options(accuracy: AccuracyHint) -> PositionOptions {
    PositionOptions {
        enable_high_accuracy: matches!(accuracy, AccuracyHint::High),
        timeout: 10000,
        maximum_age: 0,
    }
}

fn map_permission(state: PermissionState) -> PermissionStatus {
    match state {
        PermissionState::Granted => PermissionStatus::Granted,
        PermissionState::Denied => PermissionStatus::Denied,
        _ => PermissionStatus::Prompt,
    }
}

/// Platform-null optionals pass through as `None`, never zeroed. The plugin
/// always reports horizontal accuracy, so it arrives as `Some`.
fn map_position(position: Position) -> LocationReading {
    let coords = position.coords;
    LocationReading {
        latitude: coords.latitude,
        longitude: coords.longitude,
        accuracy: Some(coords.accuracy),
        altitude: coords.altitude,
        altitude_accuracy: coords.altitude_accuracy,
        heading: coords.heading,
        speed: coords.speed,
    }
}

impl LocationProvider for TauriLocationProvider {
    fn request_permission(&self) -> impl Future<Output = Result<PermissionStatus>> + Send {
        async move {
            let status = self
                .0
                .geolocation()
                .request_permissions(Some(vec![PermissionType::Location]))?;
            Ok(map_permission(status.location))
        }
    }

    fn current_position(
        &self,
        accuracy: AccuracyHint,
    ) -> impl Future<Output = Result<LocationReading>> + Send {
        async move {
            let position = self
                .0
                .geolocation()
                .get_current_position(Some(position_options(accuracy)))?;
            Ok(map_position(position))
        }
    }
}
