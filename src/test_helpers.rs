//! Shared test utilities for the simple-press test suite.
//!
//! Item builders for the pure modules (dates, collections, filters) and a
//! throwaway-site writer for the scanner.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let items = vec![
//!     ordered_item("/tutorial/b/", Some(2)),
//!     dated_item("/about/", "2026-01-10"),
//!     item("/2026/01/post/"),
//! ];
//!
//! let tmp = write_site(&[("src/tutorial/intro.md", "---\norder: 1\n---\n")]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::dates::parse_date_str;
use crate::types::{ContentItem, FrontMatter};

// =========================================================================
// Item builders
// =========================================================================

/// Input path a locator would have produced for `url`.
fn input_path_for(url: &str) -> String {
    format!("{}.md", url.trim_matches('/'))
}

/// An item with empty front matter.
pub fn item(url: &str) -> ContentItem {
    ContentItem::new(url, input_path_for(url), FrontMatter::default())
}

/// An item whose front matter `date` is the raw string `date`.
///
/// The string goes through the same parse as ingestion, so an unparsable
/// value yields an item with no date.
pub fn dated_item(url: &str, date: &str) -> ContentItem {
    let data = FrontMatter {
        date: parse_date_str(date),
        ..FrontMatter::default()
    };
    ContentItem::new(url, input_path_for(url), data)
}

/// An item with an explicit (or absent) `order`.
pub fn ordered_item(url: &str, order: Option<i64>) -> ContentItem {
    let data = FrontMatter {
        order,
        ..FrontMatter::default()
    };
    ContentItem::new(url, input_path_for(url), data)
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// URLs of a sorted sequence, in order.
pub fn urls<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.url.as_str()).collect()
}

/// Input paths of owned items, in order.
pub fn input_paths(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|i| i.input_path.as_str()).collect()
}

// =========================================================================
// Site fixtures
// =========================================================================

/// Write `(relative path, content)` pairs into a fresh temp directory.
pub fn write_site(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, content) in files {
        write_file(tmp.path(), rel, content);
    }
    tmp
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
}
