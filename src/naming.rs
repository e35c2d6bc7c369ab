//! Centralized URL path parsing.
//!
//! Every piece of display metadata the core derives (slug, tutorial name,
//! month label, fallback publication date) comes from the same two parses of a
//! site-relative URL:
//!
//! - **Segments**: split on `/`, empty segments dropped.
//!   `/tutorial/basics/intro/` → `["tutorial", "basics", "intro"]`
//! - **Dated prefix**: the anchored pattern `^/(\d{4})/(\d{2})/`.
//!   `/2026/01/my-post/` → year `"2026"`, month `"01"`
//!
//! This module also owns the input-path → URL mapping used by the locator, so
//! the URL conventions live in one place:
//! - `tutorial/intro.md` → `/tutorial/intro/`
//! - `2026/01/my-post/index.md` → `/2026/01/my-post/`
//! - `index.md` → `/`

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Leading `/YYYY/MM/` of a URL. ASCII digits only.
pub const DATED_URL_PATTERN: &str = r"^/(\d{4})/(\d{2})/";

static DATED_URL: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(DATED_URL_PATTERN)
        .unicode(false)
        .build()
        .expect("dated URL pattern must compile")
});

/// Year and month codes captured from a `/YYYY/MM/...` URL.
///
/// Both parts are kept as the raw matched text: the month code may still be
/// out of calendar range (`00`, `13`), which callers handle themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedUrl<'a> {
    pub year: &'a str,
    pub month: &'a str,
}

/// Match the dated prefix of a URL.
pub fn parse_dated_url(url: &str) -> Option<DatedUrl<'_>> {
    let caps = DATED_URL.captures(url)?;
    Some(DatedUrl {
        year: caps.get(1)?.as_str(),
        month: caps.get(2)?.as_str(),
    })
}

/// Non-empty `/`-separated segments of a URL, in order.
pub fn url_segments(url: &str) -> Vec<&str> {
    url.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolve the public URL for a content file.
///
/// A `permalink` wins when present (a leading `/` is added if missing).
/// Otherwise the extension is dropped and the path becomes a directory URL;
/// `index` files take their parent directory's URL.
pub fn url_for_input_path(input_path: &str, permalink: Option<&str>) -> String {
    if let Some(link) = permalink {
        return if link.starts_with('/') {
            link.to_string()
        } else {
            format!("/{link}")
        };
    }

    let mut segments = url_segments(input_path);
    if let Some(last) = segments.pop() {
        let stem = match last.rfind('.') {
            Some(pos) if pos > 0 => &last[..pos],
            _ => last,
        };
        if stem != "index" {
            segments.push(stem);
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}
