//! Collection assembly and ordering.
//!
//! A collection is a named, ordered view over the items a glob pattern selects.
//! Each named collection uses exactly one [`SortPolicy`]:
//!
//! | Policy                 | Key                      | Direction    | Typical use |
//! |------------------------|--------------------------|--------------|-------------|
//! | `sequential`           | front matter `order`, 0  | ascending    | tutorials   |
//! | `reverse-chronological`| [`resolve_date`], epoch  | descending   | articles    |
//!
//! Both sorts are stable: items with equal keys keep the order the locator
//! produced. That order is not meaningful in itself, it only makes tie-breaking
//! reproducible. The filesystem locator yields items by input path, so a given
//! set of files always assembles into the same sequence.
//!
//! Sort keys are computed fresh on every assembly and never cached.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::dates::resolve_date;
use crate::glob::Pattern;
use crate::types::ContentItem;

/// Ordering policy of a named collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Ascending by explicit `order`, absent treated as 0.
    Sequential,
    /// Newest first by resolved publication date.
    ReverseChronological,
}

impl SortPolicy {
    /// Compute the sort key of one item under this policy.
    ///
    /// Keys of both policies compare ascending; the reverse-chronological key
    /// wraps the timestamp in [`Reverse`].
    pub fn key(self, item: &ContentItem) -> SortKey {
        match self {
            Self::Sequential => SortKey::Order(item.data.order_or_default()),
            Self::ReverseChronological => SortKey::Timestamp(Reverse(resolve_date(item))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::ReverseChronological => "reverse-chronological",
        }
    }
}

/// Derived ordering key. Never stored on items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Order(i64),
    Timestamp(Reverse<i64>),
}

/// Source of content items for collection queries.
///
/// Implementations return every item whose input path matches the pattern.
/// No ordering guarantee is required of them.
pub trait ContentLocator {
    fn locate(&self, pattern: &Pattern) -> Vec<&ContentItem>;
}

/// A plain slice is a locator over its own items.
impl ContentLocator for [ContentItem] {
    fn locate(&self, pattern: &Pattern) -> Vec<&ContentItem> {
        self.iter()
            .filter(|item| pattern.matches(&item.input_path))
            .collect()
    }
}

/// Order items under a policy. Stable, total, never fails.
pub fn sort_items(items: &mut [&ContentItem], policy: SortPolicy) {
    items.sort_by_cached_key(|item| policy.key(item));
}

/// Definition of a named collection: which items, and how they are ordered.
#[derive(Debug, Clone)]
pub struct CollectionSpec {
    pub name: String,
    pub pattern: Pattern,
    pub policy: SortPolicy,
}

impl CollectionSpec {
    pub fn new(name: impl Into<String>, pattern: Pattern, policy: SortPolicy) -> Self {
        Self {
            name: name.into(),
            pattern,
            policy,
        }
    }

    /// Query the locator and order the result.
    pub fn assemble<'a, L>(&self, locator: &'a L) -> Collection<'a>
    where
        L: ContentLocator + ?Sized,
    {
        let mut items = locator.locate(&self.pattern);
        sort_items(&mut items, self.policy);
        Collection {
            name: self.name.clone(),
            policy: self.policy,
            items,
        }
    }
}

/// An assembled collection. Borrows its items from the locator.
#[derive(Debug, Clone)]
pub struct Collection<'a> {
    pub name: String,
    pub policy: SortPolicy,
    pub items: Vec<&'a ContentItem>,
}

impl<'a> Collection<'a> {
    /// URLs in collection order. They borrow from the locator, not from `self`.
    pub fn urls(&self) -> Vec<&'a str> {
        self.items.iter().map(|&item| item.url.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{dated_item, item, ordered_item, urls};

    fn sorted<'a>(items: &'a [ContentItem], policy: SortPolicy) -> Vec<&'a ContentItem> {
        let mut refs: Vec<&ContentItem> = items.iter().collect();
        sort_items(&mut refs, policy);
        refs
    }

    // =========================================================================
    // Sequential policy
    // =========================================================================

    #[test]
    fn sequential_missing_order_sorts_as_zero() {
        let items = vec![
            ordered_item("/tutorial/item1/", Some(2)),
            ordered_item("/tutorial/item2/", None),
            ordered_item("/tutorial/item3/", Some(1)),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::Sequential)),
            vec!["/tutorial/item2/", "/tutorial/item3/", "/tutorial/item1/"]
        );
    }

    #[test]
    fn sequential_ties_keep_input_order() {
        let items = vec![
            ordered_item("/b/", Some(1)),
            ordered_item("/a/", Some(1)),
            ordered_item("/c/", None),
            ordered_item("/d/", Some(0)),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::Sequential)),
            vec!["/c/", "/d/", "/b/", "/a/"]
        );
    }

    #[test]
    fn sequential_negative_orders_come_first() {
        let items = vec![
            ordered_item("/zero/", None),
            ordered_item("/minus/", Some(-5)),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::Sequential)),
            vec!["/minus/", "/zero/"]
        );
    }

    // =========================================================================
    // Reverse-chronological policy
    // =========================================================================

    #[test]
    fn reverse_chronological_newest_first() {
        let items = vec![
            item("/2024/05/middle/"),
            dated_item("/about/", "2026-01-10"),
            item("/2019/01/oldest/"),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::ReverseChronological)),
            vec!["/about/", "/2024/05/middle/", "/2019/01/oldest/"]
        );
    }

    #[test]
    fn reverse_chronological_is_descending_over_resolved_dates() {
        let items = vec![
            item("/2021/03/a/"),
            dated_item("/x/", "2023-07-01T12:00:00Z"),
            item("/nodate/"),
            item("/2025/12/b/"),
            dated_item("/2010/01/c/", "2022-02-02"),
        ];
        let out = sorted(&items, SortPolicy::ReverseChronological);
        let stamps: Vec<i64> = out.iter().map(|i| resolve_date(i)).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]), "{stamps:?}");
    }

    #[test]
    fn reverse_chronological_ties_keep_input_order() {
        let items = vec![
            item("/2026/01/first/"),
            item("/2026/01/second/"),
            dated_item("/third/", "2026-01-01T00:00:00Z"),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::ReverseChronological)),
            vec!["/2026/01/first/", "/2026/01/second/", "/third/"]
        );
    }

    #[test]
    fn undated_items_sort_as_oldest_and_keep_order() {
        let items = vec![
            item("/undated-b/"),
            item("/2000/01/y2k/"),
            item("/undated-a/"),
        ];
        assert_eq!(
            urls(&sorted(&items, SortPolicy::ReverseChronological)),
            vec!["/2000/01/y2k/", "/undated-b/", "/undated-a/"]
        );
    }

    // =========================================================================
    // Shared properties
    // =========================================================================

    #[test]
    fn sorting_is_idempotent() {
        let items = vec![
            dated_item("/2026/02/x/", "2026-02-10"),
            ordered_item("/2026/01/y/", Some(3)),
            item("/2026/01/z/"),
            ordered_item("/w/", Some(1)),
            item("/v/"),
        ];
        for policy in [SortPolicy::Sequential, SortPolicy::ReverseChronological] {
            let once = sorted(&items, policy);
            let mut twice = once.clone();
            sort_items(&mut twice, policy);
            assert_eq!(urls(&once), urls(&twice), "{policy:?}");
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        let mut none: Vec<&ContentItem> = Vec::new();
        sort_items(&mut none, SortPolicy::ReverseChronological);
        assert!(none.is_empty());
    }

    #[test]
    fn sort_keys_compare_ascending() {
        let newer = dated_item("/n/", "2026-01-01");
        let older = dated_item("/o/", "2020-01-01");
        let policy = SortPolicy::ReverseChronological;
        assert!(policy.key(&newer) < policy.key(&older));

        let first = ordered_item("/1/", Some(1));
        let second = ordered_item("/2/", Some(2));
        assert!(SortPolicy::Sequential.key(&first) < SortPolicy::Sequential.key(&second));
    }

    #[test]
    fn policy_names_round_trip_through_serde() {
        let p: SortPolicy = serde_json::from_str("\"reverse-chronological\"").unwrap();
        assert_eq!(p, SortPolicy::ReverseChronological);
        assert_eq!(
            serde_json::to_string(&SortPolicy::Sequential).unwrap(),
            format!("\"{}\"", SortPolicy::Sequential.as_str())
        );
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    #[test]
    fn assemble_filters_by_pattern_and_sorts() {
        let mut a = ordered_item("/tutorial/a/", Some(2));
        a.input_path = "tutorial/a.md".into();
        let mut b = ordered_item("/tutorial/b/", Some(1));
        b.input_path = "tutorial/b.md".into();
        let mut post = item("/2026/01/post/");
        post.input_path = "2026/01/post.md".into();
        let items = vec![a, post, b];

        let tutorials = CollectionSpec::new(
            "tutorials",
            Pattern::new("tutorial/*.md").unwrap(),
            SortPolicy::Sequential,
        );
        let collection = tutorials.assemble(items.as_slice());

        assert_eq!(collection.name, "tutorials");
        assert_eq!(collection.urls(), vec!["/tutorial/b/", "/tutorial/a/"]);
    }

    #[test]
    fn assemble_with_no_matches_is_empty() {
        let items = vec![item("/about/")];
        let articles = CollectionSpec::new(
            "articles",
            Pattern::new("[0-9][0-9][0-9][0-9]/**/*.md").unwrap(),
            SortPolicy::ReverseChronological,
        );
        assert!(articles.assemble(items.as_slice()).is_empty());
    }
}
