//! Filtering and ordering shared by every catalog.
//!
//! A list view is always `filter` then `sort`: filters are conjunctive and
//! never look at position, and sorting is stable so equal keys keep seed order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

pub trait RecordOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Text fields searched by the free-text box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that can be ranked trending-first.
pub trait Ranked {
    fn trending(&self) -> bool;
    fn rating(&self) -> f32;
}

/// Inclusive price bounds; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Case-insensitive substring match over any searchable field. A blank
/// needle matches everything.
pub fn matches_text<T: Searchable>(record: &T, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn optional_text_matches<T: Searchable>(record: &T, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| matches_text(record, needle))
}

/// Trending before not trending, then higher rating first.
pub fn trending_first<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.trending()
        .cmp(&a.trending())
        .then_with(|| b.rating().total_cmp(&a.rating()))
}

pub fn filter_records<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T> + ?Sized,
{
    records.iter().filter(|record| filter.matches(record)).collect()
}

pub fn sort_records<T, O>(records: &mut [T], order: &O)
where
    O: RecordOrder<T> + ?Sized,
{
    // `sort_by` is stable.
    records.sort_by(|a, b| order.compare(a, b));
}

/// The visible subset of a catalog in display order.
pub fn visible<T, F, O>(records: &[T], filter: &F, order: Option<&O>) -> Vec<T>
where
    T: Clone,
    F: RecordFilter<T> + ?Sized,
    O: RecordOrder<T> + ?Sized,
{
    let mut shown: Vec<T> = filter_records(records, filter).into_iter().cloned().collect();
    if let Some(order) = order {
        sort_records(&mut shown, order);
    }
    shown
}
