//! Display metadata derived from URLs and dates.
//!
//! Pure, total functions the rendering layer calls once per template
//! expression. None of them touch shared state or fail: a missing or
//! malformed input produces an empty string (or `false`).
//!
//! | Filter                 | Input                    | Output          |
//! |------------------------|--------------------------|-----------------|
//! | `getSlug`              | `/a/b/c/`                | `c`             |
//! | `getTutorialName`      | `/tutorial/basics/intro` | `basics`        |
//! | `startsWith`           | `/tutorial/x`, `/tut`    | `true`          |
//! | `htmlDateString`       | `2026-03-05T10:00:00Z`   | `2026-03-05`    |
//! | `getMonthYearFromUrl`  | `/2026/01/my-post/`      | `Januari 2026`  |
//!
//! The template-facing names above are bound in [`crate::registry`].

use chrono::{DateTime, Utc};

use crate::naming;

/// First URL segment of tutorial pages.
pub const TUTORIAL_SECTION: &str = "tutorial";

/// Display names for month codes, in the site's single locale.
pub const MONTH_NAMES: [(&str, &str); 12] = [
    ("01", "Januari"),
    ("02", "Februari"),
    ("03", "Maret"),
    ("04", "April"),
    ("05", "Mei"),
    ("06", "Juni"),
    ("07", "Juli"),
    ("08", "Agustus"),
    ("09", "September"),
    ("10", "Oktober"),
    ("11", "November"),
    ("12", "Desember"),
];

/// Display name for a two-digit month code, or the code itself when unmapped.
pub fn month_name(code: &str) -> &str {
    MONTH_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Last non-empty path segment.
pub fn get_slug(url: &str) -> String {
    naming::url_segments(url)
        .last()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Tutorial name of a `/tutorial/<name>/...` URL.
pub fn get_tutorial_name(url: &str) -> String {
    match naming::url_segments(url).as_slice() {
        [TUTORIAL_SECTION, name, ..] => name.to_string(),
        _ => String::new(),
    }
}

/// Prefix test that treats an absent or empty URL as no match.
pub fn starts_with(url: Option<&str>, prefix: &str) -> bool {
    match url {
        Some(url) if !url.is_empty() => url.starts_with(prefix),
        _ => false,
    }
}

/// Calendar date in UTC, `YYYY-MM-DD`.
pub fn html_date_string(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `"<MonthName> <Year>"` from a `/YYYY/MM/` URL prefix, or `""`.
pub fn get_month_year_from_url(url: &str) -> String {
    naming::parse_dated_url(url)
        .map(|d| format!("{} {}", month_name(d.month), d.year))
        .unwrap_or_default()
}
