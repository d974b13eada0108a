use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A coordinate component in decimal degrees
pub type Coordinate = f64;

/// A single point-in-time GPS sample as reported by a Geolocation API.
///
/// Latitude and longitude are always present together, a reading is never
/// partial. Optional fields are `None` when the platform didn't report them,
/// never zero, so "unknown" stays distinct from "measured as zero".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, specta::Type)]
pub struct LocationReading {
    /// Latitude
    pub latitude: Coordinate,
    /// Longitude
    pub longitude: Coordinate,
    /// Horizontal accuracy in meters
    pub accuracy: Option<f64>,
    /// Meters above sea level
    pub altitude: Option<f64>,
    /// Vertical accuracy in meters
    pub altitude_accuracy: Option<f64>,
    /// Bearing, optional as GPS can't always determine it
    pub heading: Option<f64>,
    /// Ground speed in meters per second
    pub speed: Option<f64>,
}

/// Outcome of asking for foreground location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The platform would need to (re-)prompt the user. Counts as not
    /// granted for anyone deciding whether to read the position.
    Prompt,
}

/// Power/precision trade-off requested for a position read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyHint {
    Low,
    Balanced,
    High,
}

pub trait LocationProvider: Send + Sync {
    /// Request foreground location access, prompting the user if the platform
    /// decides to. May suspend indefinitely while the prompt is up.
    fn request_permission(&self) -> impl Future<Output = Result<PermissionStatus>> + Send;
    /// Read the device's current position once. No watch/subscription is
    /// established.
    fn current_position(
        &self,
        accuracy: AccuracyHint,
    ) -> impl Future<Output = Result<LocationReading>> + Send;
}
