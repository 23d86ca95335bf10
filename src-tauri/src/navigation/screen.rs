use serde::{Deserialize, Serialize};

/// Every screen the frontend can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    GiftPlanner,
    GiftIdeas,
    Shopping,
    Budget,
    MealPlanner,
    Timeline,
    CreativeIdeas,
    Checklist,
    NotFound,
}

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::Landing,
        Screen::GiftPlanner,
        Screen::GiftIdeas,
        Screen::Shopping,
        Screen::Budget,
        Screen::MealPlanner,
        Screen::Timeline,
        Screen::CreativeIdeas,
        Screen::Checklist,
        Screen::NotFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::GiftPlanner => "gift-planner",
            Screen::GiftIdeas => "gift-ideas",
            Screen::Shopping => "shopping",
            Screen::Budget => "budget",
            Screen::MealPlanner => "meal-planner",
            Screen::Timeline => "timeline",
            Screen::CreativeIdeas => "creative-ideas",
            Screen::Checklist => "checklist",
            Screen::NotFound => "not-found",
        }
    }

    /// Resolve a frontend identifier. Unknown identifiers land on `NotFound`.
    pub fn from_id(id: &str) -> Screen {
        let id = id.trim();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str().eq_ignore_ascii_case(id))
            .unwrap_or(Screen::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_id() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_id(screen.as_str()), screen);
        }
    }

    #[test]
    fn unknown_identifier_resolves_to_not_found() {
        assert_eq!(Screen::from_id("wishlist-v2"), Screen::NotFound);
        assert_eq!(Screen::from_id(""), Screen::NotFound);
    }

    #[test]
    fn from_id_ignores_case_and_padding() {
        assert_eq!(Screen::from_id("  Gift-Planner "), Screen::GiftPlanner);
    }

    #[test]
    fn serde_uses_the_same_identifiers() {
        for screen in Screen::ALL {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.as_str()));
        }
    }
}
