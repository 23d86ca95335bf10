use std::time::Duration;

use tauri::{AppHandle, Emitter, State};

use crate::{
    carousel::{CarouselController, CarouselEmitter, CarouselState},
    AppState,
};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

impl CarouselEmitter for AppHandle {
    fn emit_carousel(&self, event: &str, state: &CarouselState) {
        if let Err(err) = self.emit(event, state.clone()) {
            log_warn!("failed to emit {} for carousel {}: {}", event, state.id, err);
        }
    }
}

fn controller_from_state(state: &State<'_, AppState>) -> CarouselController {
    state.carousels.clone()
}

#[tauri::command]
pub async fn start_carousel(
    state: State<'_, AppState>,
    id: String,
    slide_count: usize,
    interval_ms: Option<u64>,
) -> Result<CarouselState, String> {
    let defaults = state.planner.settings().carousel();
    let interval = interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| defaults.interval());

    let controller = controller_from_state(&state);
    controller
        .start(&id, slide_count, interval, defaults.auto_rotate)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn pause_carousel(
    state: State<'_, AppState>,
    id: String,
) -> Result<CarouselState, String> {
    let controller = controller_from_state(&state);
    controller.pause(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn resume_carousel(
    state: State<'_, AppState>,
    id: String,
) -> Result<CarouselState, String> {
    let controller = controller_from_state(&state);
    controller.resume(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn select_slide(
    state: State<'_, AppState>,
    id: String,
    slide: usize,
) -> Result<CarouselState, String> {
    let controller = controller_from_state(&state);
    controller
        .select(&id, slide)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn stop_carousel(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let controller = controller_from_state(&state);
    controller.stop(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_carousel(
    state: State<'_, AppState>,
    id: String,
) -> Result<CarouselState, String> {
    let controller = controller_from_state(&state);
    controller.snapshot(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_carousels(state: State<'_, AppState>) -> Result<Vec<CarouselState>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.list().await)
}
