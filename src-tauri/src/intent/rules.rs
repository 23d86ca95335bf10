//! Static keyword rules for routing a search to a screen.
//!
//! Rules are evaluated top to bottom and the first match wins, so the table
//! order is the priority order. More specific rules (two requirements) sit
//! above the generic ones they overlap with.

use crate::navigation::{ContextKind, Screen};

/// Extra context a rule attaches once it has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    None,
    Recipient,
    MealType,
    CreativeCategory,
}

#[derive(Debug)]
pub struct IntentRule {
    pub name: &'static str,
    /// Every group must contribute at least one substring of the query.
    pub requires: &'static [&'static [&'static str]],
    pub screen: Screen,
    pub kind: ContextKind,
    pub enrichment: Enrichment,
}

impl IntentRule {
    /// `normalized` must already be trimmed and lower-cased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.requires
            .iter()
            .all(|group| group.iter().any(|keyword| normalized.contains(keyword)))
    }
}

pub static RULES: &[IntentRule] = &[
    IntentRule {
        name: "gift-planning",
        requires: &[&["gift"], &["for", "ideas"]],
        screen: Screen::GiftPlanner,
        kind: ContextKind::GiftPlanning,
        enrichment: Enrichment::Recipient,
    },
    IntentRule {
        name: "shopping",
        requires: &[&["buy", "shop", "purchase"]],
        screen: Screen::Shopping,
        kind: ContextKind::Shopping,
        enrichment: Enrichment::None,
    },
    IntentRule {
        name: "budget",
        requires: &[&["budget", "spend", "cost", "afford", "money"]],
        screen: Screen::Budget,
        kind: ContextKind::Budget,
        enrichment: Enrichment::None,
    },
    IntentRule {
        name: "meal-planning",
        requires: &[&[
            "meal", "dinner", "lunch", "breakfast", "dessert", "recipe", "menu", "cook", "feast",
            "bake",
        ]],
        screen: Screen::MealPlanner,
        kind: ContextKind::MealPlanning,
        enrichment: Enrichment::MealType,
    },
    IntentRule {
        name: "creative",
        requires: &[&["decor", "ornament", "wreath", "craft", "diy", "activit", "game"]],
        screen: Screen::CreativeIdeas,
        kind: ContextKind::Creative,
        enrichment: Enrichment::CreativeCategory,
    },
    IntentRule {
        name: "timeline",
        requires: &[&["timeline", "schedule", "countdown", "deadline", "when"]],
        screen: Screen::Timeline,
        kind: ContextKind::Timeline,
        enrichment: Enrichment::None,
    },
    IntentRule {
        name: "gift-ideas",
        requires: &[&["gift", "present"]],
        screen: Screen::GiftIdeas,
        kind: ContextKind::GiftIdeas,
        enrichment: Enrichment::Recipient,
    },
];

const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "dessert"];

const CREATIVE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Decorations", &["decor", "ornament", "wreath"]),
    ("Crafts", &["craft", "diy"]),
    ("Activities", &["activit", "game"]),
];

/// The meal type mentioned earliest in the query, if any. Compared word by
/// word, so "brunch" is not read as "lunch". A trailing plural `s` is allowed.
pub fn meal_type(normalized: &str) -> Option<&'static str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            MEAL_TYPES.iter().copied().find(|meal| {
                word == *meal || word.strip_suffix('s') == Some(*meal)
            })
        })
}

pub fn creative_category(normalized: &str) -> Option<&'static str> {
    CREATIVE_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(category, _)| *category)
}
