//! Content records shared by every stage.
//!
//! A [`ContentItem`] is what the locator hands to the core: a resolved URL, the
//! source path it came from, and its front matter. Front matter arrives as
//! loosely-typed YAML and is narrowed into [`FrontMatter`] exactly once, at
//! ingestion. Everything downstream reads typed fields and never re-interprets
//! raw values.
//!
//! ## Lenient narrowing
//!
//! Nothing in front matter can fail a build on its own. A field that does not
//! have the expected shape is simply absent:
//!
//! | Raw `date`                  | `FrontMatter::date`       |
//! |-----------------------------|---------------------------|
//! | `2026-03-05`                | `2026-03-05T00:00:00Z`    |
//! | `2026-03-05T10:00:00+02:00` | `2026-03-05T08:00:00Z`    |
//! | `1767225600000` (number)    | epoch milliseconds        |
//! | `last tuesday`              | `None`                    |
//!
//! | Raw `order` | `FrontMatter::order` |
//! |-------------|----------------------|
//! | `3`         | `Some(3)`            |
//! | `2.0`       | `Some(2)`            |
//! | `"4"`       | `Some(4)`            |
//! | `first`     | `None`               |

use chrono::{DateTime, Utc};
use serde_yaml::{Mapping, Value};

use crate::dates;

/// Typed front matter, resolved at the ingestion boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Publication instant, present only when the raw value parsed.
    pub date: Option<DateTime<Utc>>,
    /// Explicit position in a sequential collection.
    pub order: Option<i64>,
    pub title: Option<String>,
    /// URL override; wins over the path-derived URL.
    pub permalink: Option<String>,
    /// Drafts are left out of the index unless the config opts in.
    pub draft: bool,
}

impl FrontMatter {
    /// Narrow a raw YAML mapping into typed fields.
    pub fn from_yaml(raw: &Mapping) -> Self {
        let field = |key: &str| raw.get(key);

        Self {
            date: field("date").and_then(date_from_value),
            order: field("order").and_then(order_from_value),
            title: field("title")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            permalink: field("permalink")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            draft: field("draft").and_then(Value::as_bool).unwrap_or(false),
        }
    }

    /// Sort position under the sequential policy; absent means 0.
    pub fn order_or_default(&self) -> i64 {
        self.order.unwrap_or(0)
    }
}

fn date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => dates::parse_date_str(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn order_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A single content source as seen by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Site-relative URL, always starting with `/`.
    pub url: String,
    /// Source path relative to the content root, `/`-separated.
    pub input_path: String,
    pub data: FrontMatter,
}

impl ContentItem {
    pub fn new(url: impl Into<String>, input_path: impl Into<String>, data: FrontMatter) -> Self {
        Self {
            url: url.into(),
            input_path: input_path.into(),
            data,
        }
    }
}
