//! Glob patterns for collection queries.
//!
//! Collections select their items with a glob over content-root-relative
//! paths. Matching is done by `globset` with path separators treated
//! literally, so a wildcard never crosses a directory boundary.
//!
//! | Syntax     | Matches                                       |
//! |------------|-----------------------------------------------|
//! | `*`        | any run of characters except `/`              |
//! | `?`        | one character except `/`                      |
//! | `**/`      | zero or more whole directories                |
//! | `/**`      | everything below a directory                  |
//! | `[abc]`    | one character from the set (ranges allowed)   |
//! | `[!abc]`   | one character not in the set                  |
//! | `{md,njk}` | any of the comma-separated alternatives       |
//! | `\*`       | a literal `*`                                 |
//!
//! A leading `./` is ignored so `./tutorial/*.md` and `tutorial/*.md` are the
//! same pattern.

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid glob '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },
    #[error("Invalid glob '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A compiled glob.
#[derive(Clone)]
pub struct Pattern {
    glob: String,
    matcher: GlobMatcher,
}

impl Pattern {
    pub fn new(glob: &str) -> Result<Self, PatternError> {
        let body = strip_dot_slash(glob);
        if body.is_empty() {
            return Err(PatternError::InvalidGlob {
                pattern: glob.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }

        let matcher = GlobBuilder::new(body)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| PatternError::Glob {
                pattern: glob.to_string(),
                source: e,
            })?
            .compile_matcher();

        Ok(Self {
            glob: glob.to_string(),
            matcher,
        })
    }

    /// Test a `/`-separated relative path. A leading `./` is ignored.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(strip_dot_slash(path))
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }
}

fn strip_dot_slash(s: &str) -> &str {
    s.strip_prefix("./").unwrap_or(s)
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.glob).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(glob: &str) -> Pattern {
        Pattern::new(glob).unwrap()
    }

    #[test]
    fn star_stays_within_a_segment() {
        let p = pat("tutorial/*.md");
        assert!(p.matches("tutorial/intro.md"));
        assert!(!p.matches("tutorial/basics/intro.md"));
        assert!(!p.matches("tutorial/intro.njk"));
        assert!(!p.matches("other/tutorial/intro.md"));
    }

    #[test]
    fn nested_section_is_its_own_pattern() {
        let p = pat("en/tutorial/*.md");
        assert!(p.matches("en/tutorial/intro.md"));
        assert!(!p.matches("tutorial/intro.md"));
        assert!(!pat("tutorial/*.md").matches("en/tutorial/intro.md"));
    }

    #[test]
    fn double_star_slash_matches_zero_or_more_dirs() {
        let p = pat("articles/**/*.md");
        assert!(p.matches("articles/a.md"));
        assert!(p.matches("articles/2026/a.md"));
        assert!(p.matches("articles/2026/01/deep/a.md"));
        assert!(!p.matches("articlesx/a.md"));
    }

    #[test]
    fn trailing_double_star_matches_everything_below() {
        let p = pat("notes/**");
        assert!(p.matches("notes/a.md"));
        assert!(p.matches("notes/x/y/z.html"));
        assert!(!p.matches("other/a.md"));
    }

    #[test]
    fn character_class_for_year_directories() {
        let p = pat("[0-9][0-9][0-9][0-9]/**/*.md");
        assert!(p.matches("2026/01/my-post.md"));
        assert!(p.matches("2026/01/my-post/index.md"));
        assert!(!p.matches("tutorial/intro.md"));
        assert!(!p.matches("202/01/post.md"));
    }

    #[test]
    fn negated_class() {
        let p = pat("[!_]*.md");
        assert!(p.matches("about.md"));
        assert!(!p.matches("_draft.md"));
    }

    #[test]
    fn question_mark_is_one_char() {
        let p = pat("v?.md");
        assert!(p.matches("v1.md"));
        assert!(!p.matches("v10.md"));
        assert!(!p.matches("v/.md"));
    }

    #[test]
    fn brace_alternation() {
        let p = pat("pages/*.{md,njk,html}");
        assert!(p.matches("pages/a.md"));
        assert!(p.matches("pages/b.njk"));
        assert!(p.matches("pages/c.html"));
        assert!(!p.matches("pages/d.txt"));
    }

    #[test]
    fn backslash_escapes_metacharacters() {
        let p = pat(r"notes/\*.md");
        assert!(p.matches("notes/*.md"));
        assert!(!p.matches("notes/x.md"));
        assert!(!p.matches(r"notes/\x.md"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let p = pat("a+b (1).md");
        assert!(p.matches("a+b (1).md"));
        assert!(!p.matches("aab (1).md"));
        assert!(!p.matches("a+b (1)xmd"));
    }

    #[test]
    fn leading_dot_slash_is_ignored() {
        let p = pat("./tutorial/*.md");
        assert!(p.matches("tutorial/a.md"));
        assert!(p.matches("./tutorial/a.md"));
        assert_eq!(p.as_str(), "./tutorial/*.md");
    }

    #[test]
    fn empty_pattern_is_error() {
        assert!(matches!(
            Pattern::new(""),
            Err(PatternError::InvalidGlob { .. })
        ));
        assert!(Pattern::new("./").is_err());
    }

    #[test]
    fn unclosed_class_is_error() {
        assert!(matches!(
            Pattern::new("[0-9/*.md"),
            Err(PatternError::Glob { .. })
        ));
    }

    #[test]
    fn unclosed_brace_is_error() {
        assert!(matches!(
            Pattern::new("*.{md,njk"),
            Err(PatternError::Glob { .. })
        ));
    }
}
