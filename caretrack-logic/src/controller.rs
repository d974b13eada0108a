use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    display::LocationUiState,
    location::{AccuracyHint, LocationProvider, LocationReading, PermissionStatus},
};

/// Payload-free "state changed" signal to the UI layer, which is expected to
/// re-query via [LocationController::get_ui_state].
pub trait StateUpdateSender: Send + Sync {
    fn send_update(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, specta::Type)]
/// Why an acquisition ended without a reading.
pub enum AcquireFailure {
    /// The user (or platform policy) refused foreground location access
    PermissionDenied,
    /// The position read failed: timeout, hardware unavailable, service
    /// disabled mid-flight. The cause is logged, never shown to the user.
    ReadFailed,
}

impl AcquireFailure {
    /// Fixed user-facing message for this failure.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Permission to access location was denied",
            Self::ReadFailed => "Could not fetch location",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, specta::Type)]
/// Where an acquisition currently stands. Exactly one variant is ever active,
/// so the UI can never show an error next to a stale reading.
pub enum AcquisitionState {
    #[default]
    Idle,
    Loading,
    Success(LocationReading),
    Failure(AcquireFailure),
}

/// Owns the acquisition state machine for one visit to the location screen.
/// Reads the position through [LocationProvider] and signals the UI through
/// [StateUpdateSender].
pub struct LocationController<P: LocationProvider, S: StateUpdateSender> {
    state: RwLock<AcquisitionState>,
    provider: P,
    updates: S,
    generation: AtomicU64,
}

impl<P: LocationProvider, S: StateUpdateSender> LocationController<P, S> {
    pub fn new(provider: P, updates: S) -> Self {
        Self {
            state: RwLock::new(AcquisitionState::default()),
            provider,
            updates,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn clone_state(&self) -> AcquisitionState {
        self.state.read().await.clone()
    }

    pub async fn get_ui_state(&self) -> LocationUiState {
        self.state.read().await.as_ui_state()
    }

    /// Run one permission-then-read sequence, always leaving a terminal
    /// state. The permission must come back granted before the read is
    /// issued, the two platform calls are never in flight together.
    ///
    /// Safe to call while a previous invocation is still awaiting the
    /// platform: the state resets to [AcquisitionState::Loading] before any
    /// I/O, and only the newest invocation may write the terminal state, so
    /// a slow stale read never clobbers a newer result.
    pub async fn acquire(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.state.write().await = AcquisitionState::Loading;
        self.updates.send_update();

        let outcome = self.run_sequence().await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer acquire started while we were suspended, its result wins
            return;
        }
        *state = outcome;
        drop(state);
        self.updates.send_update();
    }

    async fn run_sequence(&self) -> AcquisitionState {
        let status = match self.provider.request_permission().await {
            Ok(status) => status,
            Err(why) => {
                warn!("Location permission request failed: {why:?}");
                return AcquisitionState::Failure(AcquireFailure::ReadFailed);
            }
        };

        if status != PermissionStatus::Granted {
            return AcquisitionState::Failure(AcquireFailure::PermissionDenied);
        }

        match self.provider.current_position(AccuracyHint::Balanced).await {
            Ok(reading) => AcquisitionState::Success(reading),
            Err(why) => {
                warn!("Failed to get location: {why:?}");
                AcquisitionState::Failure(AcquireFailure::ReadFailed)
            }
        }
    }
}
