//! Plain-text result table for the terminal.

use unicode_width::UnicodeWidthStr;

use crate::domain::ProductRecord;

const NAME_HEADER: &str = "item_name";
const RATING_HEADER: &str = "item_rating";
const REVIEWS_HEADER: &str = "item_num_reviews";
const COLUMN_WIDTH: usize = 20;
const COLUMN_GAP: &str = "  ";

/// Ratings are shown at the precision they were loaded with (`4.25`, `4`).
pub fn format_rating(rating: f64) -> String {
    rating.to_string()
}

/// Render ranked products as an aligned table.
///
/// The name column is as wide as the longest name; rating is padded to a
/// fixed width and the review count closes the line without padding.
pub fn render_table(results: &[&ProductRecord]) -> String {
    let name_width = results
        .iter()
        .map(|record| record.name().width())
        .chain(std::iter::once(NAME_HEADER.width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    push_row(&mut out, NAME_HEADER, RATING_HEADER, REVIEWS_HEADER, name_width);
    if results.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }
    for record in results {
        push_row(
            &mut out,
            record.name(),
            &format_rating(record.average_rating()),
            &record.review_count().to_string(),
            name_width,
        );
    }
    out
}

fn push_row(out: &mut String, name: &str, rating: &str, reviews: &str, name_width: usize) {
    out.push_str(name);
    out.push_str(&" ".repeat(name_width.saturating_sub(name.width())));
    out.push_str(COLUMN_GAP);
    out.push_str(&format!("{rating:<width$}", width = COLUMN_WIDTH));
    out.push_str(reviews);
    out.push('\n');
}
