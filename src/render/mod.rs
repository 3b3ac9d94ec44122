//! Output rendering (terminal table, JSON, CSV report)

pub mod json;
pub mod report;
pub mod table;

pub use json::render_json;
pub use report::{write_report, REPORT_HEADER};
pub use table::render_table;
