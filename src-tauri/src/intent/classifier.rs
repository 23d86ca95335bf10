use serde::Serialize;

use crate::navigation::{ContextKind, Navigation, SearchContext, Stage};

use super::recipient::extract_recipient;
use super::rules::{creative_category, meal_type, Enrichment, IntentRule, RULES};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Outcome of classifying one query.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntentMatch {
    /// Name of the rule that fired, `None` for the stage fallback.
    pub rule: Option<&'static str>,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self { rules: RULES }
    }
}

impl IntentClassifier {
    pub fn with_rules(rules: &'static [IntentRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [IntentRule] {
        self.rules
    }

    /// Route a query to a screen. Never fails: a query no rule recognizes goes
    /// to the stage's default screen with the query kept as context.
    pub fn classify(&self, query: &str, stage: Stage) -> IntentMatch {
        let query = query.trim();
        let normalized = query.to_lowercase();

        let Some(rule) = self.rules.iter().find(|rule| rule.matches(&normalized)) else {
            log_debug!("no rule matched {:?}; falling back to {:?}", query, stage);
            return IntentMatch {
                rule: None,
                navigation: Navigation::with_context(
                    stage.default_screen(),
                    SearchContext::new(ContextKind::General, query),
                ),
            };
        };

        let mut context = SearchContext::new(rule.kind, query);
        match rule.enrichment {
            Enrichment::None => {}
            Enrichment::Recipient => context.recipient = extract_recipient(&normalized),
            Enrichment::MealType => context.meal_type = meal_type(&normalized).map(String::from),
            Enrichment::CreativeCategory => {
                context.category = creative_category(&normalized).map(String::from)
            }
        }

        log_debug!("rule {} matched {:?}", rule.name, query);

        IntentMatch {
            rule: Some(rule.name),
            navigation: Navigation::with_context(rule.screen, context),
        }
    }

    /// Resolve a submitted search box. A blank query skips classification and
    /// opens the stage's default screen without context.
    pub fn search(&self, query: &str, stage: Stage) -> Navigation {
        if query.trim().is_empty() {
            return Navigation::to(stage.default_screen());
        }
        self.classify(query, stage).navigation
    }
}
