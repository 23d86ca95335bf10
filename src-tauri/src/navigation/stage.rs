use serde::{Deserialize, Serialize};

use super::Screen;

/// The three planning phases shown on the landing page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Gathering inspiration.
    #[default]
    Spark,
    /// Turning ideas into a plan.
    Shape,
    /// Getting things done.
    Start,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Spark => "spark",
            Stage::Shape => "shape",
            Stage::Start => "start",
        }
    }

    /// Where a search lands when nothing more specific matches.
    pub fn default_screen(&self) -> Screen {
        match self {
            Stage::Spark => Screen::CreativeIdeas,
            Stage::Shape => Screen::Timeline,
            Stage::Start => Screen::Checklist,
        }
    }
}
