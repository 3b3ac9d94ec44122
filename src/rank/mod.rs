//! Product ranking within a category

use crate::domain::{ProductRecord, SearchQuery};

pub mod ranker;

pub use ranker::{filter_by_category, top_n, RankingEngine, COARSE_SHORTLIST_FACTOR};

/// Rank `records` for a validated query.
pub fn rank_products<'a>(
    records: &'a [ProductRecord],
    query: &SearchQuery,
) -> Vec<&'a ProductRecord> {
    RankingEngine::new(records).search(&query.category, query.count)
}
