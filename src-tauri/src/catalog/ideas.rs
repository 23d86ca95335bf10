use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::query::{
    optional_text_matches, trending_first, Ranked, RecordFilter, RecordOrder, Searchable,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IdeaCategory {
    Decorations,
    Crafts,
    Food,
    Activities,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreativeIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub difficulty: Difficulty,
    pub minutes: u32,
    pub tags: Vec<String>,
    pub rating: f32,
    pub trending: bool,
    pub saved: bool,
}

impl Searchable for CreativeIdea {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Ranked for CreativeIdea {
    fn trending(&self) -> bool {
        self.trending
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaFilter {
    pub category: Option<IdeaCategory>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub saved_only: bool,
}

impl RecordFilter<CreativeIdea> for IdeaFilter {
    fn matches(&self, idea: &CreativeIdea) -> bool {
        self.category.map_or(true, |category| idea.category == category)
            && self.difficulty.map_or(true, |difficulty| idea.difficulty == difficulty)
            && optional_text_matches(idea, self.search.as_deref())
            && (!self.saved_only || idea.saved)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IdeaSort {
    TrendingFirst,
    Rating,
    QuickestFirst,
    Alphabetical,
}

impl RecordOrder<CreativeIdea> for IdeaSort {
    fn compare(&self, a: &CreativeIdea, b: &CreativeIdea) -> Ordering {
        match self {
            IdeaSort::TrendingFirst => trending_first(a, b),
            IdeaSort::Rating => b.rating.total_cmp(&a.rating),
            IdeaSort::QuickestFirst => a.minutes.cmp(&b.minutes),
            IdeaSort::Alphabetical => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: IdeaCategory,
    difficulty: Difficulty,
    minutes: u32,
    tags: &'static [&'static str],
    rating: f32,
    trending: bool,
}

impl From<Seed> for CreativeIdea {
    fn from(seed: Seed) -> Self {
        CreativeIdea {
            id: seed.id.into(),
            title: seed.title.into(),
            description: seed.description.into(),
            category: seed.category,
            difficulty: seed.difficulty,
            minutes: seed.minutes,
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            rating: seed.rating,
            trending: seed.trending,
            saved: false,
        }
    }
}

pub fn seed() -> Vec<CreativeIdea> {
    [
        Seed {
            id: "idea-1",
            title: "Pinecone Garland",
            description: "String painted pinecones along the mantel",
            category: IdeaCategory::Decorations,
            difficulty: Difficulty::Easy,
            minutes: 45,
            tags: &["nature", "mantel", "kids"],
            rating: 4.6,
            trending: true,
        },
        Seed {
            id: "idea-2",
            title: "Felt Ornament Set",
            description: "Hand-stitched stars and trees for the tree",
            category: IdeaCategory::Crafts,
            difficulty: Difficulty::Medium,
            minutes: 120,
            tags: &["sewing", "tree", "keepsake"],
            rating: 4.4,
            trending: false,
        },
        Seed {
            id: "idea-3",
            title: "Mason Jar Snow Globes",
            description: "Glitter, figurines and a jar make a snowy centerpiece",
            category: IdeaCategory::Decorations,
            difficulty: Difficulty::Easy,
            minutes: 30,
            tags: &["table", "glitter", "kids"],
            rating: 4.8,
            trending: false,
        },
        Seed {
            id: "idea-4",
            title: "Gingerbread Village",
            description: "Bake and assemble a street of gingerbread houses",
            category: IdeaCategory::Food,
            difficulty: Difficulty::Hard,
            minutes: 240,
            tags: &["baking", "family", "icing"],
            rating: 4.9,
            trending: true,
        },
        Seed {
            id: "idea-5",
            title: "Fresh Eucalyptus Wreath",
            description: "Wire eucalyptus and berries onto a brass hoop",
            category: IdeaCategory::Decorations,
            difficulty: Difficulty::Medium,
            minutes: 60,
            tags: &["door", "greenery", "modern"],
            rating: 4.7,
            trending: true,
        },
        Seed {
            id: "idea-6",
            title: "Holiday Movie Bingo",
            description: "Printable bingo cards for a classic film night",
            category: IdeaCategory::Activities,
            difficulty: Difficulty::Easy,
            minutes: 15,
            tags: &["games", "movie night", "family"],
            rating: 4.2,
            trending: false,
        },
        Seed {
            id: "idea-7",
            title: "Paper Snowflake Window",
            description: "Fold and cut snowflakes to tape across the windows",
            category: IdeaCategory::Decorations,
            difficulty: Difficulty::Easy,
            minutes: 20,
            tags: &["paper", "window", "kids"],
            rating: 4.3,
            trending: false,
        },
        Seed {
            id: "idea-8",
            title: "Cookie Swap Party",
            description: "Invite friends to trade a dozen cookies each",
            category: IdeaCategory::Activities,
            difficulty: Difficulty::Medium,
            minutes: 180,
            tags: &["party", "baking", "friends"],
            rating: 4.5,
            trending: true,
        },
    ]
    .into_iter()
    .map(CreativeIdea::from)
    .collect()
}
