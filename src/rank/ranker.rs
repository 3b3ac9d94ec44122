//! Two-stage top-N selection.
//!
//! Products are first narrowed to a coarse shortlist by review count, then
//! cut to the final list by average rating. Each stage sorts by `id` before
//! sorting by its key, so records that tie on the key keep a deterministic
//! ascending-`id` order.

use crate::domain::ProductRecord;

/// Width of the review-count shortlist relative to the requested count.
///
/// Keeping `n * 10` candidates leaves enough records for the rating stage
/// when many products share a rating.
pub const COARSE_SHORTLIST_FACTOR: usize = 10;

/// Records whose primary category equals `category` exactly, in input order.
pub fn filter_by_category<'a>(
    records: &'a [ProductRecord],
    category: &str,
) -> Vec<&'a ProductRecord> {
    records.iter().filter(|record| record.primary_category() == category).collect()
}

/// Size of the coarse shortlist for `matched` candidates and a request of `n`.
pub fn shortlist_len(matched: usize, n: usize) -> usize {
    matched.min(n.saturating_mul(COARSE_SHORTLIST_FACTOR))
}

/// The top `n` of `matching`, by review count then by rating.
pub fn top_n(mut matching: Vec<&ProductRecord>, n: usize) -> Vec<&ProductRecord> {
    // Coarse stage: most-reviewed first.
    matching.sort_by(|a, b| a.id().cmp(b.id()));
    matching.sort_by(|a, b| b.review_count().cmp(&a.review_count()));
    matching.truncate(shortlist_len(matching.len(), n));

    // Fine stage: best-rated first.
    matching.sort_by(|a, b| a.id().cmp(b.id()));
    matching.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating()));
    matching.truncate(n);
    matching
}

/// Read-only ranking view over a record slice.
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    records: &'a [ProductRecord],
}

impl<'a> RankingEngine<'a> {
    pub fn new(records: &'a [ProductRecord]) -> Self {
        Self { records }
    }

    pub fn search(&self, category: &str, n: usize) -> Vec<&'a ProductRecord> {
        let matching = filter_by_category(self.records, category);
        let matched = matching.len();
        let shortlist = shortlist_len(matched, n);
        let ranked = top_n(matching, n);
        tracing::debug!(
            category,
            requested = n,
            matched,
            shortlist,
            returned = ranked.len(),
            "ranked category"
        );
        ranked
    }
}
