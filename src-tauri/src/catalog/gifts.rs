use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::query::{
    optional_text_matches, trending_first, PriceRange, Ranked, RecordFilter, RecordOrder,
    Searchable,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GiftCategory {
    Tech,
    Home,
    Fashion,
    Experiences,
    Books,
    Toys,
    Food,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiftSuggestion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f32,
    pub category: GiftCategory,
    pub tags: Vec<String>,
    pub trending: bool,
    pub saved: bool,
}

impl Searchable for GiftSuggestion {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Ranked for GiftSuggestion {
    fn trending(&self) -> bool {
        self.trending
    }

    fn rating(&self) -> f32 {
        self.rating
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GiftFilter {
    pub category: Option<GiftCategory>,
    pub price: Option<PriceRange>,
    pub search: Option<String>,
    pub saved_only: bool,
}

impl RecordFilter<GiftSuggestion> for GiftFilter {
    fn matches(&self, gift: &GiftSuggestion) -> bool {
        self.category.map_or(true, |category| gift.category == category)
            && self.price.map_or(true, |range| range.contains(gift.price))
            && optional_text_matches(gift, self.search.as_deref())
            && (!self.saved_only || gift.saved)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GiftSort {
    TrendingFirst,
    PriceAscending,
    PriceDescending,
    Rating,
    Alphabetical,
}

impl RecordOrder<GiftSuggestion> for GiftSort {
    fn compare(&self, a: &GiftSuggestion, b: &GiftSuggestion) -> Ordering {
        match self {
            GiftSort::TrendingFirst => trending_first(a, b),
            GiftSort::PriceAscending => a.price.total_cmp(&b.price),
            GiftSort::PriceDescending => b.price.total_cmp(&a.price),
            GiftSort::Rating => b.rating.total_cmp(&a.rating),
            GiftSort::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn gift(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    rating: f32,
    category: GiftCategory,
    tags: &[&str],
    trending: bool,
) -> GiftSuggestion {
    GiftSuggestion {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        rating,
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        trending,
        saved: false,
    }
}

pub fn seed() -> Vec<GiftSuggestion> {
    vec![
        gift(
            "gift-1",
            "Wireless Earbuds",
            "Noise-cancelling earbuds with a pocket charging case",
            89.99,
            4.6,
            GiftCategory::Tech,
            &["music", "commute", "teen"],
            true,
        ),
        gift(
            "gift-2",
            "Cashmere Scarf",
            "Soft knit scarf in a gift box",
            65.0,
            4.7,
            GiftCategory::Fashion,
            &["cozy", "winter", "mom"],
            false,
        ),
        gift(
            "gift-3",
            "Cooking Class for Two",
            "An evening pasta workshop with a local chef",
            120.0,
            4.9,
            GiftCategory::Experiences,
            &["couple", "food", "memories"],
            true,
        ),
        gift(
            "gift-4",
            "Personalized Photo Book",
            "A year of family photos printed as a hardcover album",
            45.0,
            4.8,
            GiftCategory::Home,
            &["family", "sentimental", "grandma"],
            false,
        ),
        gift(
            "gift-5",
            "Bestseller Mystery Box Set",
            "Three page-turners wrapped in holiday paper",
            38.5,
            4.4,
            GiftCategory::Books,
            &["reading", "dad", "cozy"],
            false,
        ),
        gift(
            "gift-6",
            "Build-Your-Own Robot Kit",
            "STEM kit with motors, sensors and a starter guide",
            54.99,
            4.5,
            GiftCategory::Toys,
            &["kids", "learning", "stem"],
            true,
        ),
        gift(
            "gift-7",
            "Artisan Chocolate Sampler",
            "Twenty-four hand-made truffles from small producers",
            29.0,
            4.3,
            GiftCategory::Food,
            &["sweet", "coworker", "boss"],
            false,
        ),
        gift(
            "gift-8",
            "Smart Mug",
            "Keeps coffee at the perfect temperature all morning",
            99.0,
            4.1,
            GiftCategory::Tech,
            &["coffee", "office", "boss"],
            true,
        ),
        gift(
            "gift-9",
            "Weighted Blanket",
            "Calming seven-kilogram blanket with a washable cover",
            75.0,
            4.6,
            GiftCategory::Home,
            &["cozy", "sleep", "partner"],
            false,
        ),
        gift(
            "gift-10",
            "Concert Tickets",
            "Two seats for a holiday orchestra performance",
            140.0,
            4.7,
            GiftCategory::Experiences,
            &["music", "night out", "friend"],
            false,
        ),
    ]
}
