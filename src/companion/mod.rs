//! Companion content produced by a separate content-generator tool.
//!
//! The file is a CSV whose third record holds `"primary;secondary"` keywords
//! followed by a paragraph of text. It is optional: a missing file is not an
//! error.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("companion file has fewer than 3 records")]
    TooShort,
    #[error("companion content record needs a keywords field and a paragraph field")]
    MissingFields,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const CONTENT_RECORD_INDEX: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionContent {
    pub primary_keyword: String,
    pub secondary_keyword: String,
    pub paragraph: String,
}

impl CompanionContent {
    pub fn load(path: &Path) -> Result<Option<Self>, CompanionError> {
        if !path.exists() {
            tracing::debug!("No companion content at {}", path.display());
            return Ok(None);
        }
        let file = std::fs::File::open(path)?;
        Self::read(file).map(Some)
    }

    pub fn read<R: std::io::Read>(reader: R) -> Result<Self, CompanionError> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
        let record = rdr.records().nth(CONTENT_RECORD_INDEX).ok_or(CompanionError::TooShort)??;

        let (Some(keywords), Some(paragraph)) = (record.get(0), record.get(1)) else {
            return Err(CompanionError::MissingFields);
        };
        let (primary, secondary) = split_keywords(keywords);
        Ok(Self {
            primary_keyword: primary.to_string(),
            secondary_keyword: secondary.to_string(),
            paragraph: paragraph.to_string(),
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Keywords: {} / {}\n{}\n",
            self.primary_keyword, self.secondary_keyword, self.paragraph
        )
    }
}

/// Split `"primary;secondary"` at the first `;`.
fn split_keywords(keywords: &str) -> (&str, &str) {
    keywords.split_once(';').unwrap_or((keywords, ""))
}
