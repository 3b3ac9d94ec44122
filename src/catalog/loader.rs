//! CSV catalog loading

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::Catalog;
use crate::domain::{MalformedPolicy, ProductRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("line {line}: malformed {field} value '{value}'")]
    MalformedRecord { line: u64, field: &'static str, value: String },
    #[error("line {line}: malformed row: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const REQUIRED_COLUMNS: [&str; 5] = [
    "uniq_id",
    "product_name",
    "number_of_reviews",
    "average_review_rating",
    "amazon_category_and_sub_category",
];

/// Columns used from a catalog row; everything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    uniq_id: String,
    product_name: String,
    number_of_reviews: String,
    average_review_rating: String,
    amazon_category_and_sub_category: String,
}

pub fn load_catalog(path: &Path, policy: MalformedPolicy) -> Result<Catalog, CatalogError> {
    let file = File::open(path)?;
    let catalog = read_catalog(file, policy)?;
    tracing::info!(
        "Loaded {} products from {} ({} rows skipped)",
        catalog.len(),
        path.display(),
        catalog.skipped_rows()
    );
    Ok(catalog)
}

pub fn read_catalog<R: Read>(reader: R, policy: MalformedPolicy) -> Result<Catalog, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut raw = csv::StringRecord::new();
    while rdr.read_record(&mut raw)? {
        let line = raw.position().map_or(0, csv::Position::line);
        let parsed = raw
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|err| CatalogError::MalformedRow { line, reason: err.to_string() })
            .and_then(|row| build_record(row, line));
        match parsed {
            Ok(record) => records.push(record),
            Err(err) => match policy {
                MalformedPolicy::Error => return Err(err),
                MalformedPolicy::Skip => {
                    tracing::warn!("Skipping catalog row: {}", err);
                    skipped += 1;
                }
            },
        }
    }

    Ok(Catalog::with_skipped(records, skipped))
}

fn build_record(row: RawRow, line: u64) -> Result<ProductRecord, CatalogError> {
    let review_count = parse_review_count(&row.number_of_reviews).ok_or_else(|| {
        CatalogError::MalformedRecord {
            line,
            field: "number_of_reviews",
            value: row.number_of_reviews.clone(),
        }
    })?;
    let average_rating = parse_rating(&row.average_review_rating).ok_or_else(|| {
        CatalogError::MalformedRecord {
            line,
            field: "average_review_rating",
            value: row.average_review_rating.clone(),
        }
    })?;

    Ok(ProductRecord::new(
        row.uniq_id,
        row.product_name,
        row.amazon_category_and_sub_category,
        review_count,
        average_rating,
    ))
}

/// Review counts may carry thousands separators ("1,040").
pub fn parse_review_count(text: &str) -> Option<u64> {
    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Ratings are stored as "4.5 out of 5 stars"; the leading number is the rating.
pub fn parse_rating(text: &str) -> Option<f64> {
    let token = text.split_whitespace().next()?;
    let rating: f64 = token.parse().ok()?;
    rating.is_finite().then_some(rating)
}
