//! Runtime configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use super::DEFAULT_ITEM_TYPE;

/// How the catalog loader treats rows whose numeric fields do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the load on the first malformed row.
    #[default]
    Error,
    /// Drop the row and keep loading.
    Skip,
}

impl std::str::FromStr for MalformedPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "skip" => Ok(Self::Skip),
            other => anyhow::bail!("Invalid malformed-row policy '{other}' (expected error or skip)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
    pub item_type: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub default_count: usize,
    pub on_malformed: MalformedPolicy,
    pub write_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("amazon_co-ecommerce_sample.csv"),
            output_path: PathBuf::from("output.csv"),
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            default_count: 1,
            on_malformed: MalformedPolicy::Error,
            write_output: true,
        }
    }
}

/// `default_count` is shown as the initial value of the count prompt, so a
/// zero here would be rejected later anyway. Fail while loading instead.
fn deserialize_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value == 0 {
        return Err(serde::de::Error::custom("default_count must be at least 1"));
    }
    Ok(value)
}
