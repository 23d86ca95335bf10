pub mod carousel;
pub mod catalog;
pub mod intent;
pub mod navigation;
pub mod planner;
pub mod relay;
pub mod settings;
pub mod utils;

pub use planner::Planner;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Arc;

    use tauri::{Manager, RunEvent, State};

    use crate::{
        carousel::{
            commands::{
                get_carousel, list_carousels, pause_carousel, resume_carousel, select_slide,
                start_carousel, stop_carousel,
            },
            CarouselController,
        },
        catalog::commands::{
            get_budget_summary, list_creative_ideas, list_gifts, list_shopping_items,
            toggle_gift_saved, toggle_idea_saved, toggle_shopping_item_completed,
        },
        intent::commands::{classify_query, resolve_screen, search, take_search_context},
        navigation::Stage,
        settings::{CarouselSettings, PlannerSettings, SettingsStore},
        utils::logging,
        Planner,
    };

    pub(crate) struct AppState {
        pub(crate) planner: Planner,
        pub(crate) carousels: CarouselController,
    }

    #[tauri::command]
    fn get_settings(state: State<AppState>) -> Result<PlannerSettings, String> {
        Ok(state.planner.settings().snapshot())
    }

    #[tauri::command]
    fn set_active_stage(stage: Stage, state: State<AppState>) -> Result<(), String> {
        state
            .planner
            .settings()
            .set_active_stage(stage)
            .map_err(|e| e.to_string())
    }

    #[tauri::command]
    fn update_carousel_settings(
        settings: CarouselSettings,
        state: State<AppState>,
    ) -> Result<(), String> {
        state
            .planner
            .settings()
            .update_carousel(settings)
            .map_err(|e| e.to_string())
    }

    #[tauri::command]
    fn set_budget_limit(limit: Option<f64>, state: State<AppState>) -> Result<(), String> {
        state
            .planner
            .settings()
            .set_budget_limit(limit)
            .map_err(|e| e.to_string())
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        // Reads RUST_LOG and WONDERLIST_DEBUG
        logging::init();

        log::info!("WonderList starting up...");

        let app = tauri::Builder::default()
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let settings_path = app_data_dir.join("settings.json");
                    let settings = SettingsStore::new(settings_path)?;

                    let carousels = CarouselController::new(Arc::new(app.handle().clone()));

                    app.manage(AppState {
                        planner: Planner::new(settings),
                        carousels,
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                search,
                classify_query,
                take_search_context,
                resolve_screen,
                list_gifts,
                list_shopping_items,
                list_creative_ideas,
                toggle_gift_saved,
                toggle_idea_saved,
                toggle_shopping_item_completed,
                get_budget_summary,
                start_carousel,
                pause_carousel,
                resume_carousel,
                select_slide,
                stop_carousel,
                get_carousel,
                list_carousels,
                get_settings,
                set_active_stage,
                update_carousel_settings,
                set_budget_limit,
            ])
            .build(tauri::generate_context!())
            .expect("error while building tauri application");

        app.run(|app_handle, event| {
            if let RunEvent::Exit = event {
                let carousels = app_handle.state::<AppState>().carousels.clone();
                if let Err(err) = tauri::async_runtime::block_on(carousels.stop_all()) {
                    log::error!("Failed to stop carousels on exit: {err}");
                }
            }
        });
    }
}
