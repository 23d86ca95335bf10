use serde::{Deserialize, Serialize};

use super::Screen;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContextKind {
    GiftPlanning,
    Shopping,
    Budget,
    MealPlanning,
    Creative,
    Timeline,
    GiftIdeas,
    General,
}

/// Payload that pre-fills the destination screen after a search.
///
/// Only `type` and `query` are guaranteed; every other field is optional for
/// consumers and omitted from the JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(rename = "type")]
    pub kind: ContextKind,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
}

impl SearchContext {
    pub fn new(kind: ContextKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
            recipient: None,
            category: None,
            meal_type: None,
        }
    }
}

/// A resolved navigation: where to go and what to carry there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub screen: Screen,
    pub context: Option<SearchContext>,
}

impl Navigation {
    pub fn to(screen: Screen) -> Self {
        Self {
            screen,
            context: None,
        }
    }

    pub fn with_context(screen: Screen, context: SearchContext) -> Self {
        Self {
            screen,
            context: Some(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_serializes_with_type_field_and_no_empty_optionals() {
        let mut context = SearchContext::new(ContextKind::GiftPlanning, "gift ideas for mom");
        context.recipient = Some("mom".into());

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "gift-planning",
                "query": "gift ideas for mom",
                "recipient": "mom",
            })
        );
    }

    #[test]
    fn meal_type_uses_camel_case_key() {
        let mut context = SearchContext::new(ContextKind::MealPlanning, "christmas dinner");
        context.meal_type = Some("dinner".into());

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["mealType"], "dinner");
    }

    #[test]
    fn consumers_tolerate_missing_optional_fields() {
        let context: SearchContext =
            serde_json::from_str(r#"{"type":"shopping","query":"buy wrapping paper"}"#).unwrap();
        assert_eq!(context.kind, ContextKind::Shopping);
        assert!(context.recipient.is_none());
        assert!(context.category.is_none());
        assert!(context.meal_type.is_none());
    }
}
