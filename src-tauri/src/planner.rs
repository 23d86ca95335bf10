//! Everything a frontend command needs, without the frontend.
//!
//! The Tauri commands are one-line wrappers around these methods so the same
//! flows can be driven from tests.

use crate::{
    catalog::{BudgetSummary, CatalogStore},
    intent::{IntentClassifier, IntentMatch},
    navigation::{Navigation, Screen, SearchContext, Stage},
    relay::ContextRelay,
    settings::SettingsStore,
};

const ENABLE_LOGS: bool = true;

use crate::log_info;

pub struct Planner {
    classifier: IntentClassifier,
    relay: ContextRelay,
    catalog: CatalogStore,
    settings: SettingsStore,
}

impl Planner {
    pub fn new(settings: SettingsStore) -> Self {
        Self::with_catalog(settings, CatalogStore::seeded())
    }

    pub fn with_catalog(settings: SettingsStore, catalog: CatalogStore) -> Self {
        Self {
            classifier: IntentClassifier::default(),
            relay: ContextRelay::new(),
            catalog,
            settings,
        }
    }

    /// Submit the search box. The returned navigation carries its context;
    /// the same context is left in the relay for the destination to take
    /// when it mounts.
    pub fn search(&self, query: &str) -> Navigation {
        let stage = self.settings.active_stage();
        let navigation = self.classifier.search(query, stage);

        if let Some(context) = &navigation.context {
            self.relay.put(context.clone());
        }

        log_info!(
            "search in {} stage routed to {}",
            stage.as_str(),
            navigation.screen.as_str()
        );
        navigation
    }

    /// Classify without navigating. Defaults to the active stage.
    pub fn classify(&self, query: &str, stage: Option<Stage>) -> IntentMatch {
        let stage = stage.unwrap_or_else(|| self.settings.active_stage());
        self.classifier.classify(query, stage)
    }

    pub fn take_search_context(&self) -> Option<SearchContext> {
        self.relay.take()
    }

    pub fn resolve_screen(&self, id: &str) -> Screen {
        Screen::from_id(id)
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        self.catalog.budget_summary(self.settings.budget_limit())
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn relay(&self) -> &ContextRelay {
        &self.relay
    }
}
