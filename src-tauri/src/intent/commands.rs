use tauri::State;

use crate::{
    intent::IntentMatch,
    navigation::{Navigation, Screen, SearchContext, Stage},
    AppState,
};

#[tauri::command]
pub fn search(state: State<'_, AppState>, query: String) -> Result<Navigation, String> {
    Ok(state.planner.search(&query))
}

#[tauri::command]
pub fn classify_query(
    state: State<'_, AppState>,
    query: String,
    stage: Option<Stage>,
) -> Result<IntentMatch, String> {
    Ok(state.planner.classify(&query, stage))
}

#[tauri::command]
pub fn take_search_context(state: State<'_, AppState>) -> Result<Option<SearchContext>, String> {
    Ok(state.planner.take_search_context())
}

#[tauri::command]
pub fn resolve_screen(state: State<'_, AppState>, id: String) -> Result<Screen, String> {
    Ok(state.planner.resolve_screen(&id))
}
