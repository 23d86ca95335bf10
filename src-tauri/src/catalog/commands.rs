use tauri::State;

use crate::{
    catalog::{
        BudgetSummary, CreativeIdea, GiftFilter, GiftSort, GiftSuggestion, IdeaFilter, IdeaSort,
        ShoppingFilter, ShoppingItem, ShoppingSort,
    },
    AppState,
};

#[tauri::command]
pub fn list_gifts(
    state: State<'_, AppState>,
    filter: Option<GiftFilter>,
    sort: Option<GiftSort>,
) -> Result<Vec<GiftSuggestion>, String> {
    Ok(state
        .planner
        .catalog()
        .gifts(&filter.unwrap_or_default(), sort))
}

#[tauri::command]
pub fn list_shopping_items(
    state: State<'_, AppState>,
    filter: Option<ShoppingFilter>,
    sort: Option<ShoppingSort>,
) -> Result<Vec<ShoppingItem>, String> {
    Ok(state
        .planner
        .catalog()
        .shopping_items(&filter.unwrap_or_default(), sort))
}

#[tauri::command]
pub fn list_creative_ideas(
    state: State<'_, AppState>,
    filter: Option<IdeaFilter>,
    sort: Option<IdeaSort>,
) -> Result<Vec<CreativeIdea>, String> {
    Ok(state
        .planner
        .catalog()
        .ideas(&filter.unwrap_or_default(), sort))
}

#[tauri::command]
pub fn toggle_gift_saved(state: State<'_, AppState>, gift_id: String) -> Result<bool, String> {
    state
        .planner
        .catalog()
        .toggle_gift_saved(&gift_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_idea_saved(state: State<'_, AppState>, idea_id: String) -> Result<bool, String> {
    state
        .planner
        .catalog()
        .toggle_idea_saved(&idea_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_shopping_item_completed(
    state: State<'_, AppState>,
    item_id: String,
) -> Result<bool, String> {
    state
        .planner
        .catalog()
        .toggle_item_completed(&item_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_budget_summary(state: State<'_, AppState>) -> Result<BudgetSummary, String> {
    Ok(state.planner.budget_summary())
}
