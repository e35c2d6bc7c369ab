//! # Simple Press
//!
//! Content collection assembly for a static content site. Markdown and
//! template files under a content root become items; named collections select
//! items by glob and put them in a deterministic order; a small set of pure
//! filters derives display strings from an item's URL.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       src/         →  ContentIndex       (files + front matter → items)
//! 2. Assemble   ContentIndex →  Vec<Collection>    (glob select + stable sort)
//! 3. Emit       collections  →  collections.json   (for the rendering layer)
//! ```
//!
//! Only stage 1 and 3 touch the filesystem. Assembly works against the
//! [`collections::ContentLocator`] trait, so it can be exercised with a plain
//! slice of items.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root, parses front matter, derives URLs |
//! | [`collections`] | Sort policies, collection definitions, assembly |
//! | [`dates`] | Publication timestamp resolution and date-string parsing |
//! | [`filters`] | Pure URL-derived display helpers (slug, section, month label) |
//! | [`registry`] | Template-facing name → filter table plus named collections |
//! | [`glob`] | Glob patterns used to select collection members |
//! | [`naming`] | URL parsing and input path → URL mapping |
//! | [`manifest`] | `collections.json` written for the rendering layer |
//! | [`config`] | `config.toml` loading, stock defaults, validation |
//! | [`types`] | `ContentItem` and its `FrontMatter` |
//! | [`output`] | CLI output formatting |
//!
//! # Ordering Rules
//!
//! ## Sequential
//!
//! Ascending by front matter `order`; a missing order counts as `0`. Items
//! with equal keys keep their locator order.
//!
//! ## Reverse Chronological
//!
//! Newest first by resolved timestamp. The timestamp comes from the first
//! source that yields one:
//!
//! ```text
//! front matter `date`  →  /YYYY/MM/ URL prefix (first of month, UTC)  →  epoch 0
//! ```
//!
//! Items that resolve to epoch 0 sink to the end; `simple-press check` lists
//! them.
//!
//! ## Determinism
//!
//! The scanner walks in file-name order and the index is kept in input-path
//! order. Both sorts are stable, so the same content tree always produces the
//! same collections.

pub mod collections;
pub mod config;
pub mod dates;
pub mod filters;
pub mod glob;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod registry;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
