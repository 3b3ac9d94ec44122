//! catalog-rank: top-N product selection for catalog categories
//!
//! Loads a product catalog from CSV and ranks a category's products in two
//! stages: a coarse shortlist by review count, then a final cut by average
//! rating.

pub mod catalog;
pub mod cli;
pub mod companion;
pub mod config;
pub mod domain;
pub mod query;
pub mod rank;
pub mod render;

pub use catalog::Catalog;
pub use domain::{ProductRecord, SearchQuery};
pub use rank::{filter_by_category, top_n, RankingEngine};
