use serde::{Deserialize, Serialize};

use crate::{controller::AcquisitionState, location::LocationReading};

/// Rendered in place of any optional field the platform didn't report.
pub const ABSENT: &str = "N/A";

/// Coordinate components render with fixed 6-decimal precision.
fn coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// Meter-valued fields render to the nearest whole meter.
fn whole_meters(value: Option<f64>) -> String {
    match value {
        Some(meters) => format!("{meters:.0}"),
        None => ABSENT.to_string(),
    }
}

fn tenths(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1}"),
        None => ABSENT.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
/// A [LocationReading] preformatted for the location screen's cards.
pub struct ReadingDisplay {
    pub latitude: String,
    pub longitude: String,
    pub accuracy: String,
    pub altitude: String,
    pub altitude_accuracy: String,
    pub heading: String,
    pub speed: String,
}

impl From<&LocationReading> for ReadingDisplay {
    fn from(reading: &LocationReading) -> Self {
        Self {
            latitude: coordinate(reading.latitude),
            longitude: coordinate(reading.longitude),
            accuracy: whole_meters(reading.accuracy),
            altitude: whole_meters(reading.altitude),
            altitude_accuracy: whole_meters(reading.altitude_accuracy),
            heading: tenths(reading.heading),
            speed: tenths(reading.speed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, specta::Type)]
/// What the frontend renders, one variant per view the location screen can
/// show. `Success` carries both the raw reading and its display strings so
/// the screen can gate cards on field presence without re-parsing.
pub enum LocationUiState {
    Idle,
    Loading,
    Failure { message: String },
    Success {
        reading: LocationReading,
        display: ReadingDisplay,
    },
}

impl AcquisitionState {
    pub fn as_ui_state(&self) -> LocationUiState {
        match self {
            AcquisitionState::Idle => LocationUiState::Idle,
            AcquisitionState::Loading => LocationUiState::Loading,
            AcquisitionState::Failure(failure) => LocationUiState::Failure {
                message: failure.user_message().to_string(),
            },
            AcquisitionState::Success(reading) => LocationUiState::Success {
                reading: *reading,
                display: reading.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{controller::AcquireFailure, tests::sample_reading};

    #[test]
    fn test_coordinates_render_with_six_decimals() {
        assert_eq!(coordinate(37.4219983), "37.421998");
        assert_eq!(coordinate(-122.084), "-122.084000");
    }

    #[test]
    fn test_absent_fields_render_as_na() {
        let display = ReadingDisplay::from(&sample_reading());
        assert_eq!(display.accuracy, "N/A");
        assert_eq!(display.altitude, "N/A");
        assert_eq!(display.altitude_accuracy, "N/A");
        assert_eq!(display.heading, "N/A");
        assert_eq!(display.speed, "N/A");
    }

    #[test]
    fn test_altitude_renders_whole_meters() {
        let reading = LocationReading {
            altitude: Some(12.6),
            ..sample_reading()
        };
        let display = ReadingDisplay::from(&reading);
        assert_eq!(display.altitude, "13");
    }

    #[test]
    fn test_measured_zero_is_not_absent() {
        let reading = LocationReading {
            altitude: Some(0.0),
            ..sample_reading()
        };
        let display = ReadingDisplay::from(&reading);
        assert_eq!(display.altitude, "0");
    }

    #[test]
    fn test_failure_projects_fixed_message() {
        let state = AcquisitionState::Failure(AcquireFailure::PermissionDenied);
        assert_eq!(
            state.as_ui_state(),
            LocationUiState::Failure {
                message: "Permission to access location was denied".to_string(),
            }
        );
    }

    #[test]
    fn test_success_projects_display_strings() {
        let state = AcquisitionState::Success(sample_reading());
        let LocationUiState::Success { reading, display } = state.as_ui_state() else {
            panic!("Expected a success projection");
        };
        assert_eq!(reading, sample_reading());
        assert_eq!(display.latitude, "37.421998");
        assert_eq!(display.longitude, "-122.084000");
    }

    #[test]
    fn test_idle_and_loading_project_as_themselves() {
        assert_eq!(AcquisitionState::Idle.as_ui_state(), LocationUiState::Idle);
        assert_eq!(
            AcquisitionState::Loading.as_ui_state(),
            LocationUiState::Loading
        );
    }
}
