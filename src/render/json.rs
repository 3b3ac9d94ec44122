//! JSON rendering of ranked results

use serde_json::{json, Value};

use crate::domain::{ProductRecord, SearchQuery};

pub fn results_to_value(query: &SearchQuery, results: &[&ProductRecord]) -> Value {
    let rows: Vec<Value> = results
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            json!({
                "rank": idx + 1,
                "id": record.id(),
                "name": record.name(),
                "category": record.primary_category(),
                "rating": record.average_rating(),
                "review_count": record.review_count(),
            })
        })
        .collect();

    json!({
        "query": {
            "item_type": query.item_type,
            "category": query.category,
            "count": query.count,
        },
        "results": rows,
    })
}

pub fn render_json(query: &SearchQuery, results: &[&ProductRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&results_to_value(query, results))
}
