use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::query::{optional_text_matches, PriceRange, RecordFilter, RecordOrder, Searchable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShoppingCategory {
    Gifts,
    Food,
    Decorations,
    Wrapping,
    Other,
}

impl ShoppingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingCategory::Gifts => "Gifts",
            ShoppingCategory::Food => "Food",
            ShoppingCategory::Decorations => "Decorations",
            ShoppingCategory::Wrapping => "Wrapping",
            ShoppingCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub store: String,
    pub category: ShoppingCategory,
    pub cost: f64,
    pub due: NaiveDate,
    /// 0..=100
    pub progress: u8,
    pub completed: bool,
}

impl Searchable for ShoppingItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.store.as_str(), self.category.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ItemStatus {
    Open,
    Completed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShoppingFilter {
    pub category: Option<ShoppingCategory>,
    pub cost: Option<PriceRange>,
    pub search: Option<String>,
    pub status: Option<ItemStatus>,
}

impl RecordFilter<ShoppingItem> for ShoppingFilter {
    fn matches(&self, item: &ShoppingItem) -> bool {
        let status_ok = match self.status {
            None => true,
            Some(ItemStatus::Open) => !item.completed,
            Some(ItemStatus::Completed) => item.completed,
        };

        status_ok
            && self.category.map_or(true, |category| item.category == category)
            && self.cost.map_or(true, |range| range.contains(item.cost))
            && optional_text_matches(item, self.search.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShoppingSort {
    /// Soonest first.
    DueDate,
    /// Most expensive first.
    Cost,
    Alphabetical,
    /// Furthest along first.
    Progress,
}

impl RecordOrder<ShoppingItem> for ShoppingSort {
    fn compare(&self, a: &ShoppingItem, b: &ShoppingItem) -> Ordering {
        match self {
            ShoppingSort::DueDate => a.due.cmp(&b.due),
            ShoppingSort::Cost => b.cost.total_cmp(&a.cost),
            ShoppingSort::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ShoppingSort::Progress => b.progress.cmp(&a.progress),
        }
    }
}

fn item(
    id: &str,
    name: &str,
    store: &str,
    category: ShoppingCategory,
    cost: f64,
    (month, day): (u32, u32),
    progress: u8,
) -> ShoppingItem {
    ShoppingItem {
        id: id.into(),
        name: name.into(),
        store: store.into(),
        category,
        cost,
        due: NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default(),
        progress,
        completed: progress == 100,
    }
}

pub fn seed() -> Vec<ShoppingItem> {
    vec![
        item("shop-1", "Cashmere scarf for Mom", "Nordstrom", ShoppingCategory::Gifts, 65.0, (12, 10), 100),
        item("shop-2", "Robot kit for Sam", "Target", ShoppingCategory::Gifts, 54.99, (12, 15), 40),
        item("shop-3", "Turkey and trimmings", "Whole Foods", ShoppingCategory::Food, 110.0, (12, 22), 0),
        item("shop-4", "Outdoor string lights", "Home Depot", ShoppingCategory::Decorations, 42.5, (12, 1), 100),
        item("shop-5", "Wrapping paper bundle", "Target", ShoppingCategory::Wrapping, 18.0, (12, 18), 50),
        item("shop-6", "Baking supplies", "Trader Joe's", ShoppingCategory::Food, 35.0, (12, 20), 0),
        item("shop-7", "Concert tickets for Alex", "Ticketmaster", ShoppingCategory::Gifts, 140.0, (12, 5), 100),
        item("shop-8", "Advent calendar", "Local market", ShoppingCategory::Other, 24.0, (11, 28), 75),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::query::visible;

    fn ids(items: &[ShoppingItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn due_date_sorts_ascending() {
        let shown = visible(&seed(), &ShoppingFilter::default(), Some(&ShoppingSort::DueDate));
        assert_eq!(
            ids(&shown),
            vec!["shop-8", "shop-4", "shop-7", "shop-1", "shop-2", "shop-5", "shop-6", "shop-3"]
        );
    }

    #[test]
    fn cost_sorts_descending() {
        let shown = visible(&seed(), &ShoppingFilter::default(), Some(&ShoppingSort::Cost));
        assert_eq!(&ids(&shown)[..3], &["shop-7", "shop-3", "shop-1"]);
    }

    #[test]
    fn progress_sorts_descending_and_keeps_ties_stable() {
        let shown = visible(&seed(), &ShoppingFilter::default(), Some(&ShoppingSort::Progress));
        assert_eq!(
            ids(&shown),
            vec!["shop-1", "shop-4", "shop-7", "shop-8", "shop-5", "shop-2", "shop-3", "shop-6"]
        );
    }

    #[test]
    fn alphabetical_ignores_case() {
        let shown = visible(&seed(), &ShoppingFilter::default(), Some(&ShoppingSort::Alphabetical));
        assert_eq!(shown.first().map(|item| item.name.as_str()), Some("Advent calendar"));
        assert_eq!(shown.last().map(|item| item.name.as_str()), Some("Wrapping paper bundle"));
    }

    #[test]
    fn status_and_store_search_combine() {
        let filter = ShoppingFilter {
            search: Some("target".into()),
            status: Some(ItemStatus::Open),
            ..ShoppingFilter::default()
        };
        let shown = visible(&seed(), &filter, Some(&ShoppingSort::DueDate));
        assert_eq!(ids(&shown), vec!["shop-2", "shop-5"]);
    }

    #[test]
    fn completed_status_matches_finished_items() {
        let filter = ShoppingFilter {
            status: Some(ItemStatus::Completed),
            category: Some(ShoppingCategory::Gifts),
            ..ShoppingFilter::default()
        };
        let shown = visible(&seed(), &filter, None::<&ShoppingSort>);
        assert_eq!(ids(&shown), vec!["shop-1", "shop-7"]);
    }

    #[test]
    fn due_date_serializes_as_iso_date() {
        let value = serde_json::to_value(&seed()[0]).unwrap();
        assert_eq!(value["due"], "2024-12-10");
    }
}
