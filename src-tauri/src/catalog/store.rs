use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Result};

use super::budget::{summarize, BudgetSummary};
use super::gifts::{self, GiftFilter, GiftSort, GiftSuggestion};
use super::ideas::{self, CreativeIdea, IdeaFilter, IdeaSort};
use super::query::visible;
use super::shopping::{self, ShoppingFilter, ShoppingItem, ShoppingSort};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

#[derive(Debug, Default)]
struct Catalogs {
    gifts: Vec<GiftSuggestion>,
    shopping: Vec<ShoppingItem>,
    ideas: Vec<CreativeIdea>,
}

/// In-memory catalogs. Saved/completed flags live here until the app exits.
#[derive(Debug, Default)]
pub struct CatalogStore {
    data: RwLock<Catalogs>,
}

impl CatalogStore {
    pub fn seeded() -> Self {
        Self::with_records(gifts::seed(), shopping::seed(), ideas::seed())
    }

    pub fn with_records(
        gifts: Vec<GiftSuggestion>,
        shopping: Vec<ShoppingItem>,
        ideas: Vec<CreativeIdea>,
    ) -> Self {
        Self {
            data: RwLock::new(Catalogs {
                gifts,
                shopping,
                ideas,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalogs> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalogs> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn gifts(&self, filter: &GiftFilter, sort: Option<GiftSort>) -> Vec<GiftSuggestion> {
        visible(&self.read().gifts, filter, sort.as_ref())
    }

    pub fn shopping_items(
        &self,
        filter: &ShoppingFilter,
        sort: Option<ShoppingSort>,
    ) -> Vec<ShoppingItem> {
        visible(&self.read().shopping, filter, sort.as_ref())
    }

    pub fn ideas(&self, filter: &IdeaFilter, sort: Option<IdeaSort>) -> Vec<CreativeIdea> {
        visible(&self.read().ideas, filter, sort.as_ref())
    }

    /// Flip a gift's saved flag and return the new value.
    pub fn toggle_gift_saved(&self, id: &str) -> Result<bool> {
        let mut guard = self.write();
        let gift = guard
            .gifts
            .iter_mut()
            .find(|gift| gift.id == id)
            .ok_or_else(|| anyhow!("unknown gift '{id}'"))?;
        gift.saved = !gift.saved;
        log_debug!("gift {} saved={}", id, gift.saved);
        Ok(gift.saved)
    }

    pub fn toggle_idea_saved(&self, id: &str) -> Result<bool> {
        let mut guard = self.write();
        let idea = guard
            .ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or_else(|| anyhow!("unknown idea '{id}'"))?;
        idea.saved = !idea.saved;
        log_debug!("idea {} saved={}", id, idea.saved);
        Ok(idea.saved)
    }

    /// Completing fills progress to 100; reopening a full item drops it to 0.
    pub fn toggle_item_completed(&self, id: &str) -> Result<bool> {
        let mut guard = self.write();
        let item = guard
            .shopping
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| anyhow!("unknown shopping item '{id}'"))?;
        item.completed = !item.completed;
        if item.completed {
            item.progress = 100;
        } else if item.progress == 100 {
            item.progress = 0;
        }
        log_debug!("shopping item {} completed={}", id, item.completed);
        Ok(item.completed)
    }

    pub fn budget_summary(&self, limit: Option<f64>) -> BudgetSummary {
        summarize(&self.read().shopping, limit)
    }
}
