//! CLI output formatting for every command.
//!
//! Output leads with each item's URL, which is how templates and readers
//! refer to it. The source file and the values that drove its position are
//! shown as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Content (3 items)
//! 001 /2026/01/my-post/
//!     Source: 2026/01/my-post.md
//!     Title: My post
//! 002 /tutorial/intro/
//!     Source: tutorial/intro.md
//!     Order: 1
//! 003 /about/
//!     Source: about.md
//! Drafts skipped: 1
//! ```
//!
//! ## Build
//!
//! ```text
//! articles (reverse-chronological, 1 item)
//!     001 /2026/01/my-post/
//!         Date: 2026-01-01
//! tutorials (sequential, 1 item)
//!     001 /tutorial/intro/
//!         Order: 1
//!
//! Assembled 2 collections, 2 items
//! ```
//!
//! ## Check
//!
//! ```text
//! articles: 1 item without a date
//!     /2026/notes/
//!         Source: 2026/notes.md
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::collections::{Collection, SortPolicy};
use crate::dates;
use crate::filters;
use crate::scan::ContentIndex;
use crate::types::ContentItem;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 item`, `2 items`.
fn count_label(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Header line plus source line for one item.
fn item_lines(index: usize, item: &ContentItem, depth: usize) -> Vec<String> {
    vec![
        format!("{}{} {}", indent(depth), format_index(index), item.url),
        format!("{}Source: {}", indent(depth + 1), item.input_path),
    ]
}

/// The value a collection's policy sorted this item by.
fn sort_detail(item: &ContentItem, policy: SortPolicy) -> String {
    match policy {
        SortPolicy::Sequential => format!("Order: {}", item.data.order_or_default()),
        SortPolicy::ReverseChronological => {
            let label = dates::resolved_instant(item)
                .map(|dt| filters::html_date_string(&dt))
                .unwrap_or_else(|| "none".to_string());
            format!("Date: {}", label)
        }
    }
}

// ============================================================================
// scan
// ============================================================================

/// Format the discovered content inventory.
pub fn format_scan_output(index: &ContentIndex) -> Vec<String> {
    let mut lines = vec![format!("Content ({})", count_label(index.len(), "item"))];

    for (i, item) in index.items.iter().enumerate() {
        lines.extend(item_lines(i + 1, item, 0));
        if let Some(title) = &item.data.title {
            lines.push(format!("{}Title: {}", indent(1), title));
        }
        if let Some(order) = item.data.order {
            lines.push(format!("{}Order: {}", indent(1), order));
        }
        if item.data.draft {
            lines.push(format!("{}Draft", indent(1)));
        }
    }

    if index.drafts_skipped > 0 {
        lines.push(format!("Drafts skipped: {}", index.drafts_skipped));
    }
    lines
}

pub fn print_scan_output(index: &ContentIndex) {
    for line in format_scan_output(index) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format assembled collections in their final order.
pub fn format_collections_output(collections: &[Collection<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total = 0;

    for collection in collections {
        lines.push(format!(
            "{} ({}, {})",
            collection.name,
            collection.policy.as_str(),
            count_label(collection.len(), "item")
        ));
        for (i, item) in collection.items.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(i + 1),
                item.url
            ));
            lines.push(format!(
                "{}{}",
                indent(2),
                sort_detail(item, collection.policy)
            ));
        }
        total += collection.len();
    }

    lines.push(String::new());
    lines.push(format!(
        "Assembled {}, {}",
        count_label(collections.len(), "collection"),
        count_label(total, "item")
    ));
    lines
}

pub fn print_collections_output(collections: &[Collection<'_>]) {
    for line in format_collections_output(collections) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Items in reverse-chronological collections with no date source at all.
/// They fall back to the epoch and sort last.
pub fn undated_items<'a>(collection: &Collection<'a>) -> Vec<&'a ContentItem> {
    if collection.policy != SortPolicy::ReverseChronological {
        return Vec::new();
    }
    collection
        .items
        .iter()
        .copied()
        .filter(|item| dates::resolved_instant(item).is_none())
        .collect()
}

pub fn format_check_output(collections: &[Collection<'_>]) -> Vec<String> {
    let mut lines = Vec::new();

    for collection in collections {
        let undated = undated_items(collection);
        if undated.is_empty() {
            continue;
        }
        lines.push(format!(
            "{}: {} without a date",
            collection.name,
            count_label(undated.len(), "item")
        ));
        for item in undated {
            lines.push(format!("{}{}", indent(1), item.url));
            lines.push(format!("{}Source: {}", indent(2), item.input_path));
        }
    }

    if lines.is_empty() {
        lines.push("Every dated collection item resolves a date".to_string());
    }
    lines
}

pub fn print_check_output(collections: &[Collection<'_>]) {
    for line in format_check_output(collections) {
        println!("{}", line);
    }
}
