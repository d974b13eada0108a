use std::{marker::PhantomData, sync::Arc};

use caretrack_logic::{LocationController, StateUpdateSender};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use tauri::AppHandle;
use tauri_specta::Event;
use tokio::sync::RwLock;

use crate::{Result, location::TauriLocationProvider};

/// The acquisition state changed, call [crate::get_location_state] after
/// receiving this
#[derive(Serialize, Deserialize, Clone, Default, Debug, specta::Type, tauri_specta::Event)]
pub struct LocationStateUpdate;

pub struct TauriStateUpdateSender<E: Clone + Default + Event + Serialize>(
    AppHandle,
    PhantomData<E>,
);

impl<E: Serialize + Clone + Default + Event> TauriStateUpdateSender<E> {
    fn new(app: &AppHandle) -> Self {
        Self(app.clone(), PhantomData)
    }
}

impl<E: Serialize + Clone + Default + Event> StateUpdateSender for TauriStateUpdateSender<E> {
    fn send_update(&self) {
        if let Err(why) = E::default().emit(&self.0) {
            error!("Error sending location state update to UI: {why:?}");
        }
    }
}

pub type AppLocationController =
    LocationController<TauriLocationProvider, TauriStateUpdateSender<LocationStateUpdate>>;

pub enum AppState {
    Home,
    Location(Arc<AppLocationController>),
}

#[derive(Serialize, Deserialize, specta::Type, Debug, Clone, Eq, PartialEq)]
pub enum AppScreen {
    Home,
    Location,
}

pub type AppStateHandle = RwLock<AppState>;

/// The app is changing screens, contains the screen it's switching to
#[derive(Serialize, Deserialize, Clone, Debug, specta::Type, tauri_specta::Event)]
pub struct ChangeScreen(AppScreen);

impl AppState {
    /// Build a fresh controller for this visit to the location screen and
    /// start the first acquisition in the background (the screen fetches on
    /// mount). Acquisition state never survives across visits.
    pub fn open_location(&mut self, app: &AppHandle) {
        let provider = TauriLocationProvider::new(app.clone());
        let updates = TauriStateUpdateSender::new(app);
        let controller = Arc::new(AppLocationController::new(provider, updates));
        *self = AppState::Location(controller.clone());
        tauri::async_runtime::spawn(async move {
            controller.acquire().await;
        });
        Self::emit_screen_change(app, AppScreen::Location);
    }

    pub fn back_to_home(&mut self, app: &AppHandle) {
        if let AppState::Home = self {
            warn!("Already on home!");
            return;
        }
        *self = AppState::Home;
        Self::emit_screen_change(app, AppScreen::Home);
    }

    pub fn get_location(&self) -> Result<Arc<AppLocationController>> {
        if let AppState::Location(controller) = self {
            Ok(controller.clone())
        } else {
            Err("Not on location screen".to_string())
        }
    }

    fn emit_screen_change(app: &AppHandle, screen: AppScreen) {
        if let Err(why) = ChangeScreen(screen).emit(app) {
            warn!("Error emitting screen change: {why:?}");
        }
    }
}
