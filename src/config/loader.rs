//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "CATALOG_RANK_";

const SECTION: &str = "catalog-rank";

/// Load config from `config_path` (or one discovered in `root`), then apply
/// `CATALOG_RANK_*` environment overrides.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let file_config = load_config_file(root, config_path)?;
    apply_env(file_config)
}

pub fn load_config_file(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Using config {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<Config> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(content, config_file),
        "yaml" | "yml" => parse_yaml_config(content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, supporting a nested [catalog-rank] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested catalog-rank section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn apply_env(base: Config) -> Result<Config> {
    Figment::from(Serialized::defaults(base))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Invalid CATALOG_RANK_* environment override")
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = [
        "catalog-rank.toml",
        ".catalog-rank.toml",
        "catalog-rank.yml",
        ".catalog-rank.yml",
        "catalog-rank.yaml",
        ".catalog-rank.yaml",
    ];

    candidates.iter().map(|candidate| root.join(candidate)).find(|path| path.exists())
}
