//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the project root (next to the content directory) and is sparse: stock
//! defaults are the base layer and user values are merged on top.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "src"        # Content directory, relative to the project root
//! output_dir = "_site"        # Where collections.json is written
//! template_formats = ["md", "njk", "html"]
//! ignore_dirs = ["_includes", "_layouts", "_data"]
//! include_drafts = false      # Keep `draft: true` items in collections
//!
//! [collections.tutorials]
//! pattern = "tutorial/*.md"
//! policy = "sequential"
//!
//! [collections.enTutorials]
//! pattern = "en/tutorial/*.md"
//! policy = "sequential"
//!
//! [collections.articles]
//! pattern = "[0-9][0-9][0-9][0-9]/**/*.md"
//! policy = "reverse-chronological"
//! ```
//!
//! ## Partial Configuration
//!
//! Override just the values you want. Collection tables merge key by key, so a
//! new pattern for an existing collection keeps its policy:
//!
//! ```toml
//! [collections.tutorials]
//! pattern = "guides/*.md"
//! ```
//!
//! New collections need both `pattern` and `policy`. Unknown keys are rejected
//! to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::collections::SortPolicy;
use crate::glob::{Pattern, PatternError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config pattern error: {0}")]
    Pattern(#[from] PatternError),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content directory, relative to the project root.
    pub content_root: String,
    /// Output directory for the collections manifest, relative to the project root.
    pub output_dir: String,
    /// File extensions (without the dot) that count as content.
    pub template_formats: Vec<String>,
    /// Directory names skipped during scanning, at any depth.
    pub ignore_dirs: Vec<String>,
    /// Keep items marked `draft: true`.
    pub include_drafts: bool,
    /// Named collections, keyed by the name templates use.
    pub collections: BTreeMap<String, CollectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut collections = BTreeMap::new();
        collections.insert(
            "tutorials".to_string(),
            CollectionConfig {
                pattern: "tutorial/*.md".to_string(),
                policy: SortPolicy::Sequential,
            },
        );
        collections.insert(
            "enTutorials".to_string(),
            CollectionConfig {
                pattern: "en/tutorial/*.md".to_string(),
                policy: SortPolicy::Sequential,
            },
        );
        collections.insert(
            "articles".to_string(),
            CollectionConfig {
                pattern: "[0-9][0-9][0-9][0-9]/**/*.md".to_string(),
                policy: SortPolicy::ReverseChronological,
            },
        );

        Self {
            content_root: "src".to_string(),
            output_dir: "_site".to_string(),
            template_formats: vec!["md".to_string(), "njk".to_string(), "html".to_string()],
            ignore_dirs: vec![
                "_includes".to_string(),
                "_layouts".to_string(),
                "_data".to_string(),
            ],
            include_drafts: false,
            collections,
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        if self.template_formats.is_empty() {
            return Err(ConfigError::Validation(
                "template_formats must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .template_formats
            .iter()
            .find(|f| f.is_empty() || f.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "template_formats entries are bare extensions, got '{bad}'"
            )));
        }
        for (name, collection) in &self.collections {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "collection names must not be empty".into(),
                ));
            }
            Pattern::new(&collection.pattern)?;
        }
        Ok(())
    }

    /// Whether a file extension counts as content (case-insensitive).
    pub fn is_template_format(&self, ext: &str) -> bool {
        self.template_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(ext))
    }
}

/// One named collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Glob over content-root-relative paths.
    pub pattern: String,
    /// How the collection is ordered.
    pub policy: SortPolicy,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given project directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Press Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Each key only needs to be present if you want to change it.
# Unknown keys will cause an error.

# Content directory, relative to this file.
content_root = "src"

# Where `simple-press build` writes collections.json.
output_dir = "_site"

# File extensions that count as content. Anything else is ignored.
template_formats = ["md", "njk", "html"]

# Directory names skipped while scanning, at any depth.
ignore_dirs = ["_includes", "_layouts", "_data"]

# Keep pages marked `draft: true` in collections.
include_drafts = false

# ---------------------------------------------------------------------------
# Collections
# ---------------------------------------------------------------------------
# Each [collections.<name>] table selects files with a glob relative to
# content_root and orders them with one policy:
#
#   sequential             ascending by front matter `order` (missing = 0)
#   reverse-chronological  newest first by `date`, else the /YYYY/MM/ in the
#                          URL, else oldest
#
# Ties keep file path order.

[collections.articles]
pattern = "[0-9][0-9][0-9][0-9]/**/*.md"
policy = "reverse-chronological"

[collections.enTutorials]
pattern = "en/tutorial/*.md"
policy = "sequential"

[collections.tutorials]
pattern = "tutorial/*.md"
policy = "sequential"
"##
}
