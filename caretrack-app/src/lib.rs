mod location;
mod state;

use caretrack_logic::LocationUiState;
use log::LevelFilter;
use tauri::{AppHandle, State};
use tauri_specta::{ErrorHandlingMode, collect_commands, collect_events};
use tokio::sync::RwLock;

use std::result::Result as StdResult;

use crate::state::{AppScreen, AppState, AppStateHandle, ChangeScreen, LocationStateUpdate};

type Result<T = (), E = String> = StdResult<T, E>;

// == GENERAL / FLOW COMMANDS ==

#[tauri::command]
#[specta::specta]
/// Get the screen the app should currently be on, returns [AppScreen]
async fn get_current_screen(state: State<'_, AppStateHandle>) -> Result<AppScreen> {
    let state = state.read().await;
    Ok(match &*state {
        AppState::Home => AppScreen::Home,
        AppState::Location(_controller) => AppScreen::Location,
    })
}

// == AppState::Home COMMANDS ==

#[tauri::command]
#[specta::specta]
/// (Screen: Home) Open the location screen. A fresh acquisition starts in the
/// background, listen for [LocationStateUpdate] and call [get_location_state].
/// This triggers a screen change to [AppScreen::Location]
async fn open_location_screen(app: AppHandle, state: State<'_, AppStateHandle>) -> Result {
    let mut state = state.write().await;
    state.open_location(&app);
    Ok(())
}

// == AppState::Location COMMANDS ==

#[tauri::command]
#[specta::specta]
/// (Screen: Location) Go back to the home screen, discarding the acquisition
/// state
async fn leave_location_screen(app: AppHandle, state: State<'_, AppStateHandle>) -> Result {
    let mut state = state.write().await;
    state.back_to_home(&app);
    Ok(())
}

#[tauri::command]
#[specta::specta]
/// (Screen: Location) Get the current acquisition state, call after receiving
/// a [LocationStateUpdate] event
async fn get_location_state(state: State<'_, AppStateHandle>) -> Result<LocationUiState> {
    let controller = state.read().await.get_location()?;
    Ok(controller.get_ui_state().await)
}

#[tauri::command]
#[specta::specta]
/// (Screen: Location) Re-run the permission-and-read sequence, used by the
/// retry and refresh buttons. Safe to call while a previous attempt is still
/// in flight, the newest attempt's result wins
async fn refresh_location(state: State<'_, AppStateHandle>) -> Result {
    let controller = state.read().await.get_location()?;
    tauri::async_runtime::spawn(async move {
        controller.acquire().await;
    });
    Ok(())
}

pub fn mk_specta() -> tauri_specta::Builder {
    tauri_specta::Builder::<tauri::Wry>::new()
        .error_handling(ErrorHandlingMode::Throw)
        .commands(collect_commands![
            get_current_screen,
            open_location_screen,
            leave_location_screen,
            get_location_state,
            refresh_location,
        ])
        .events(collect_events![ChangeScreen, LocationStateUpdate])
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let state = RwLock::new(AppState::Home);

    let builder = mk_specta();

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(LevelFilter::Debug)
                .build(),
        )
        .plugin(tauri_plugin_geolocation::init())
        .invoke_handler(builder.invoke_handler())
        .manage(state)
        .setup(move |app| {
            builder.mount_events(app);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
