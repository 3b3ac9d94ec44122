//! Output report CSV generation.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::table::format_rating;
use crate::domain::{ProductRecord, SearchQuery};

pub const REPORT_HEADER: [&str; 6] = [
    "input_item_type",
    "input_item_category",
    "input_number_to_generate",
    "output_item_name",
    "output_item_rating",
    "output_item_num_reviews",
];

/// Write one report row per ranked product, echoing the query on each row.
///
/// An empty result still produces the header row.
pub fn write_report(
    report_path: &Path,
    query: &SearchQuery,
    results: &[&ProductRecord],
) -> Result<()> {
    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed creating directory {}", parent.display()))?;
        }
    }

    let file = std::fs::File::create(report_path)
        .with_context(|| format!("Failed writing report {}", report_path.display()))?;
    write_report_to(file, query, results)?;
    tracing::info!("Wrote {} result rows to {}", results.len(), report_path.display());
    Ok(())
}

pub fn write_report_to<W: Write>(
    writer: W,
    query: &SearchQuery,
    results: &[&ProductRecord],
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;

    let count = query.count.to_string();
    for record in results {
        wtr.write_record([
            query.item_type.as_str(),
            query.category.as_str(),
            count.as_str(),
            record.name(),
            format_rating(record.average_rating()).as_str(),
            record.review_count().to_string().as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
