mod controller;
mod display;
mod location;

pub use controller::{AcquireFailure, AcquisitionState, LocationController, StateUpdateSender};
pub use display::{LocationUiState, ReadingDisplay};
pub use location::{AccuracyHint, Coordinate, LocationProvider, LocationReading, PermissionStatus};

pub mod prelude {
    use anyhow::Error as AnyhowError;
    use std::result::Result as StdResult;
    pub type Result<T = (), E = AnyhowError> = StdResult<T, E>;
    pub use anyhow::Context;
}
