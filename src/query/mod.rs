//! Query validation and the single-row query input file

use std::fs::File;
use std::path::Path;
use thiserror::Error;

use crate::domain::SearchQuery;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("requested count '{0}' is not a whole number")]
    NotANumber(String),
    #[error("requested count must be at least 1 (got {0})")]
    NonPositive(i64),
    #[error("query row is missing the {0} field")]
    MissingField(&'static str),
    #[error("query file has no rows")]
    Empty,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse a requested result count, rejecting anything below 1.
pub fn parse_count(text: &str) -> Result<usize, QueryError> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| QueryError::NotANumber(trimmed.to_string()))?;
    if value < 1 {
        return Err(QueryError::NonPositive(value));
    }
    usize::try_from(value).map_err(|_| QueryError::NotANumber(trimmed.to_string()))
}

impl SearchQuery {
    pub fn new(
        item_type: impl Into<String>,
        category: impl Into<String>,
        count_text: &str,
    ) -> Result<Self, QueryError> {
        let count = parse_count(count_text)?;
        Ok(Self { item_type: item_type.into(), category: category.into(), count })
    }
}

/// Read the query from the first row of a headerless CSV file:
/// `item_type,category,count`.
pub fn read_query_file(path: &Path) -> Result<SearchQuery, QueryError> {
    let file = File::open(path)?;
    read_query(file)
}

pub fn read_query<R: std::io::Read>(reader: R) -> Result<SearchQuery, QueryError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
    let row = rdr.records().next().ok_or(QueryError::Empty)??;

    let item_type = row.get(0).ok_or(QueryError::MissingField("item type"))?;
    let category = row.get(1).ok_or(QueryError::MissingField("category"))?;
    let count = row.get(2).ok_or(QueryError::MissingField("count"))?;
    SearchQuery::new(item_type, category, count)
}
