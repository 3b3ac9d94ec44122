//! Immutable product catalog

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{ProductRecord, SearchQuery};
use crate::rank::{rank_products, RankingEngine};

pub mod loader;

pub use loader::{load_catalog, read_catalog, CatalogError};

/// Loaded product records, shared read-only between queries.
///
/// Cloning is cheap; every clone points at the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ProductRecord]>,
    skipped_rows: usize,
}

impl Catalog {
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        Self::with_skipped(records, 0)
    }

    pub(crate) fn with_skipped(records: Vec<ProductRecord>, skipped_rows: usize) -> Self {
        Self { records: records.into(), skipped_rows }
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped by the loader under `MalformedPolicy::Skip`.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Distinct non-empty primary categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(ProductRecord::primary_category)
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    pub fn ranking_engine(&self) -> RankingEngine<'_> {
        RankingEngine::new(&self.records)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&ProductRecord> {
        rank_products(&self.records, query)
    }
}
