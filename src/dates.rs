//! Publication date resolution.
//!
//! Content reaches the site from two structurally different sources: documents
//! that carry a `date` in front matter, and documents whose URL encodes the
//! month they belong to (`/2026/01/my-post/`). The resolver folds both into one
//! comparable timeline of epoch milliseconds.
//!
//! ## Resolution chain
//!
//! The first source that yields a valid instant wins:
//!
//! 1. `data.date` (already parsed at ingestion, see [`crate::types::FrontMatter`])
//! 2. the `/YYYY/MM/` URL prefix, as `YYYY-MM-01T00:00:00Z`
//! 3. `0`, the epoch
//!
//! Explicit metadata always beats inferred URL structure. Items that resolve to
//! the epoch sort as the oldest entries; they are not dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::naming;
use crate::types::ContentItem;

/// Timestamp for items with no resolvable date.
pub const EPOCH: i64 = 0;

/// Naive formats accepted for front matter dates, all read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Resolve the canonical timestamp of an item in epoch milliseconds.
///
/// Never fails; see the [module docs](self) for the chain.
pub fn resolve_date(item: &ContentItem) -> i64 {
    resolved_instant(item)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(EPOCH)
}

/// The instant the chain resolved to, or `None` when it fell through to the
/// epoch.
///
/// A front matter date of exactly `1970-01-01T00:00:00Z` is `Some`, so callers
/// that need to tell "dated at the epoch" from "undated" use this rather than
/// comparing [`resolve_date`] with [`EPOCH`].
pub fn resolved_instant(item: &ContentItem) -> Option<DateTime<Utc>> {
    item.data.date.or_else(|| url_month_start(&item.url))
}

/// First instant of the month named by a `/YYYY/MM/` URL prefix.
///
/// `None` when the prefix is missing or the month code is not a calendar
/// month (`/2026/13/...` matches the pattern but names no month).
pub fn url_month_start(url: &str) -> Option<DateTime<Utc>> {
    let dated = naming::parse_dated_url(url)?;
    let year = dated.year.parse().ok()?;
    let month = dated.month.parse().ok()?;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}

/// Parse a calendar date or date-time string into a UTC instant.
///
/// Accepts RFC 3339 (`2026-03-05T10:00:00Z`, with any offset), RFC 2822, bare
/// dates (`2026-03-05`, midnight UTC) and offset-less date-times, which are
/// read as UTC so that results never depend on the build machine's zone.
pub fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
