use serde::{Deserialize, Serialize};

use super::shopping::{ShoppingCategory, ShoppingItem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: ShoppingCategory,
    pub planned: f64,
    pub spent: f64,
}

/// Totals shown by the budget tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub planned: f64,
    pub spent: f64,
    pub remaining: f64,
    pub limit: Option<f64>,
    pub over_budget: bool,
    /// In the order each category first appears in the list.
    pub by_category: Vec<CategorySpend>,
}

/// `spent` counts completed items, `remaining` is what is still to buy.
pub fn summarize(items: &[ShoppingItem], limit: Option<f64>) -> BudgetSummary {
    let mut by_category: Vec<CategorySpend> = Vec::new();
    let mut planned = 0.0;
    let mut spent = 0.0;

    for item in items {
        planned += item.cost;
        let paid = if item.completed { item.cost } else { 0.0 };
        spent += paid;

        match by_category.iter_mut().find(|entry| entry.category == item.category) {
            Some(entry) => {
                entry.planned += item.cost;
                entry.spent += paid;
            }
            None => by_category.push(CategorySpend {
                category: item.category,
                planned: item.cost,
                spent: paid,
            }),
        }
    }

    BudgetSummary {
        planned,
        spent,
        remaining: planned - spent,
        limit,
        over_budget: limit.map_or(false, |limit| planned > limit),
        by_category,
    }
}
