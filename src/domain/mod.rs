//! Core data types shared across the crate

mod config;

pub use config::{Config, MalformedPolicy};

/// Item type written to the report when none is configured.
pub const DEFAULT_ITEM_TYPE: &str = "toys";

/// A single catalog product.
///
/// Records are built once by the loader and never mutated afterwards. The
/// primary category is derived from `category_path` at construction time, so
/// the fields stay private to keep the two in agreement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    id: String,
    name: String,
    category_path: String,
    review_count: u64,
    average_rating: f64,
    primary_category: String,
}

impl ProductRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_path: impl Into<String>,
        review_count: u64,
        average_rating: f64,
    ) -> Self {
        let category_path = category_path.into();
        let primary_category = primary_category(&category_path).to_string();
        Self {
            id: id.into(),
            name: name.into(),
            category_path,
            review_count,
            average_rating,
            primary_category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category_path(&self) -> &str {
        &self.category_path
    }

    pub fn review_count(&self) -> u64 {
        self.review_count
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    /// Leading token of the category path, the unit users search by.
    pub fn primary_category(&self) -> &str {
        &self.primary_category
    }
}

/// Everything up to (not including) the first space of a category path.
///
/// `"Toys & Games > Dolls"` yields `"Toys"`; an empty path or one starting
/// with a space yields `""`.
pub fn primary_category(category_path: &str) -> &str {
    match category_path.find(' ') {
        Some(idx) => &category_path[..idx],
        None => category_path,
    }
}

/// A validated category search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub item_type: String,
    pub category: String,
    pub count: usize,
}
