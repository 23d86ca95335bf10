pub mod budget;
#[cfg(feature = "desktop")]
pub(crate) mod commands;
pub mod gifts;
pub mod ideas;
pub mod query;
pub mod shopping;
pub mod store;

pub use budget::{summarize, BudgetSummary, CategorySpend};
pub use gifts::{GiftCategory, GiftFilter, GiftSort, GiftSuggestion};
pub use ideas::{CreativeIdea, Difficulty, IdeaCategory, IdeaFilter, IdeaSort};
pub use query::{visible, PriceRange, RecordFilter, RecordOrder};
pub use shopping::{ItemStatus, ShoppingCategory, ShoppingFilter, ShoppingItem, ShoppingSort};
pub use store::CatalogStore;
