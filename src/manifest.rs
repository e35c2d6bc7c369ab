//! Collections manifest handed to the rendering layer.
//!
//! The rendering layer never re-sorts or re-derives anything: it reads this
//! manifest, which already carries each collection in final order plus the
//! per-item display strings the filters would produce.
//!
//! ```json
//! {
//!   "collections": {
//!     "articles": [
//!       {
//!         "url": "/2026/01/my-post/",
//!         "input_path": "2026/01/my-post.md",
//!         "title": "My post",
//!         "slug": "my-post",
//!         "order": 0,
//!         "timestamp": 1767225600000,
//!         "date": "2026-01-01",
//!         "month_year": "Januari 2026"
//!       }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::collections::Collection;
use crate::dates;
use crate::filters;
use crate::types::ContentItem;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "collections.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub collections: BTreeMap<String, Vec<ManifestEntry>>,
}

/// One item as the rendering layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub input_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slug: String,
    /// Sequential sort key (0 when absent).
    pub order: i64,
    /// Resolved publication instant, epoch milliseconds (0 when unresolvable).
    pub timestamp: i64,
    /// `YYYY-MM-DD` of `timestamp`; empty when no date source resolved.
    pub date: String,
    /// Month label from the URL; empty for undated URLs.
    pub month_year: String,
}

impl ManifestEntry {
    pub fn from_item(item: &ContentItem) -> Self {
        let timestamp = dates::resolve_date(item);
        let date = dates::resolved_instant(item)
            .map(|dt| filters::html_date_string(&dt))
            .unwrap_or_default();

        Self {
            url: item.url.clone(),
            input_path: item.input_path.clone(),
            title: item.data.title.clone(),
            slug: filters::get_slug(&item.url),
            order: item.data.order_or_default(),
            timestamp,
            date,
            month_year: filters::get_month_year_from_url(&item.url),
        }
    }
}

impl Manifest {
    pub fn build(collections: &[Collection<'_>]) -> Self {
        let collections = collections
            .iter()
            .map(|c| {
                let entries: Vec<ManifestEntry> = c
                    .items
                    .iter()
                    .map(|item| ManifestEntry::from_item(item))
                    .collect();
                (c.name.clone(), entries)
            })
            .collect();
        Self { collections }
    }

    /// Write as pretty JSON to `<dir>/collections.json`, creating `dir`.
    pub fn write(&self, dir: &Path) -> Result<(), ManifestError> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(MANIFEST_FILE), json)?;
        Ok(())
    }

    pub fn read(dir: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(dir.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::SortPolicy;
    use crate::test_helpers::{dated_item, item, ordered_item};
    use tempfile::TempDir;

    #[test]
    fn entry_from_dated_url() {
        let e = ManifestEntry::from_item(&item("/2026/01/my-post/"));
        assert_eq!(e.slug, "my-post");
        assert_eq!(e.timestamp, 1_767_225_600_000);
        assert_eq!(e.date, "2026-01-01");
        assert_eq!(e.month_year, "Januari 2026");
        assert_eq!(e.order, 0);
    }

    #[test]
    fn entry_front_matter_date_beats_url() {
        let e = ManifestEntry::from_item(&dated_item("/2026/01/post/", "2025-06-15T08:00:00Z"));
        assert_eq!(e.date, "2025-06-15");
        // The label still comes from the URL.
        assert_eq!(e.month_year, "Januari 2026");
    }

    #[test]
    fn entry_without_date_has_empty_date_string() {
        let e = ManifestEntry::from_item(&ordered_item("/tutorial/intro/", Some(3)));
        assert_eq!(e.timestamp, 0);
        assert_eq!(e.date, "");
        assert_eq!(e.month_year, "");
        assert_eq!(e.order, 3);
    }

    #[test]
    fn entry_dated_exactly_at_epoch_keeps_its_date() {
        let e = ManifestEntry::from_item(&dated_item("/about/", "1970-01-01T00:00:00Z"));
        assert_eq!(e.timestamp, 0);
        assert_eq!(e.date, "1970-01-01");
    }

    #[test]
    fn build_keeps_collection_order() {
        let items = vec![item("/2026/01/a/"), item("/2026/02/b/")];
        let collection = Collection {
            name: "articles".to_string(),
            policy: SortPolicy::ReverseChronological,
            items: vec![&items[1], &items[0]],
        };
        let manifest = Manifest::build(&[collection]);
        let urls: Vec<&str> = manifest.collections["articles"]
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(urls, vec!["/2026/02/b/", "/2026/01/a/"]);
    }

    #[test]
    fn write_then_read() {
        let tmp = TempDir::new().unwrap();
        let items = vec![item("/2026/01/a/")];
        let manifest = Manifest::build(&[Collection {
            name: "articles".to_string(),
            policy: SortPolicy::ReverseChronological,
            items: items.iter().collect(),
        }]);

        let out = tmp.path().join("_site");
        manifest.write(&out).unwrap();
        assert!(out.join(MANIFEST_FILE).exists());
        assert_eq!(Manifest::read(&out).unwrap(), manifest);
    }

    #[test]
    fn title_omitted_when_absent() {
        let e = ManifestEntry::from_item(&item("/about/"));
        let json = serde_json::to_value(&e).unwrap();
        assert!(json.get("title").is_none());
    }
}
