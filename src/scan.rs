//! Filesystem content discovery.
//!
//! Walks the content root once, reads every content file's front matter, and
//! produces a [`ContentIndex`]: the owned set of items that collections borrow
//! from. This is the only place in the crate that touches the filesystem;
//! dates, sorting, and filters work purely on the index.
//!
//! ## Directory Structure
//!
//! ```text
//! project/
//! ├── config.toml                  # Site configuration (optional)
//! ├── _site/                       # Output (skipped)
//! └── src/                         # Content root
//!     ├── index.njk                # → /
//!     ├── about.md                 # → /about/
//!     ├── _includes/               # Ignored (ignore_dirs)
//!     ├── tutorial/
//!     │   ├── intro.md             # → /tutorial/intro/   (order: 1)
//!     │   └── setup.md             # → /tutorial/setup/   (order: 2)
//!     └── 2026/
//!         └── 01/
//!             ├── my-post.md       # → /2026/01/my-post/
//!             └── other/
//!                 └── index.md     # → /2026/01/other/
//! ```
//!
//! ## Front Matter
//!
//! A YAML block between `---` lines at the very start of a file. Files without
//! one get empty front matter. A block that is not valid YAML, or not a
//! mapping, is an error: the file's author meant to say something and the
//! build should not silently guess.
//!
//! ## Validation
//!
//! - The content root must exist
//! - No two items may resolve to the same URL

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::collections::ContentLocator;
use crate::config::SiteConfig;
use crate::glob::Pattern;
use crate::naming;
use crate::types::{ContentItem, FrontMatter};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content root not found: {0}")]
    MissingContentRoot(PathBuf),
    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },
    #[error("Duplicate URL {url}: {first} and {second}")]
    DuplicateUrl {
        url: String,
        first: String,
        second: String,
    },
}

/// Every content item found under the content root, ordered by input path.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    pub items: Vec<ContentItem>,
    /// Number of `draft: true` files left out.
    pub drafts_skipped: usize,
}

impl ContentIndex {
    /// Build an index from already-ingested items.
    ///
    /// Items are put in input-path order so that collection ties resolve the
    /// same way regardless of where the items came from.
    pub fn from_items(mut items: Vec<ContentItem>) -> Self {
        items.sort_by(|a, b| a.input_path.cmp(&b.input_path));
        Self {
            items,
            drafts_skipped: 0,
        }
    }

    pub fn find_by_url(&self, url: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.url == url)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContentLocator for ContentIndex {
    fn locate(&self, pattern: &Pattern) -> Vec<&ContentItem> {
        self.items.as_slice().locate(pattern)
    }
}

/// Scan the content root of a project.
pub fn scan(project_root: &Path, config: &SiteConfig) -> Result<ContentIndex, ScanError> {
    let content_root = project_root.join(&config.content_root);
    if !content_root.is_dir() {
        return Err(ScanError::MissingContentRoot(content_root));
    }
    let output_dir = project_root.join(&config.output_dir);

    let mut items = Vec::new();
    let mut drafts_skipped = 0;

    let walker = WalkDir::new(&content_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e, config, &output_dir));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_content_file(entry.path(), config) {
            continue;
        }

        let input_path = relative_input_path(entry.path(), &content_root);
        let content = fs::read_to_string(entry.path())?;
        let data = parse_front_matter(&content, entry.path())?;

        if data.draft && !config.include_drafts {
            drafts_skipped += 1;
            continue;
        }

        let url = naming::url_for_input_path(&input_path, data.permalink.as_deref());
        items.push(ContentItem::new(url, input_path, data));
    }

    let index = ContentIndex {
        drafts_skipped,
        ..ContentIndex::from_items(items)
    };
    check_duplicate_urls(&index.items)?;
    Ok(index)
}

/// Hidden entries, configured ignore dirs, and the output directory.
fn is_skipped(entry: &DirEntry, config: &SiteConfig, output_dir: &Path) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    if entry.file_type().is_dir() {
        return entry.path() == output_dir || config.ignore_dirs.iter().any(|d| *d == name);
    }
    false
}

fn is_content_file(path: &Path, config: &SiteConfig) -> bool {
    path.extension()
        .map(|ext| config.is_template_format(&ext.to_string_lossy()))
        .unwrap_or(false)
}

/// Content-root-relative path with `/` separators on every platform.
fn relative_input_path(path: &Path, content_root: &Path) -> String {
    path.strip_prefix(content_root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a leading `---` delimited block from the body.
///
/// Returns `None` when the file does not open with a delimiter line or the
/// block is never closed.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Read typed front matter from a file's content.
pub fn parse_front_matter(content: &str, path: &Path) -> Result<FrontMatter, ScanError> {
    let Some((block, _body)) = split_front_matter(content) else {
        return Ok(FrontMatter::default());
    };

    let invalid = |message: String| ScanError::FrontMatter {
        path: path.to_path_buf(),
        message,
    };

    let value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|e| invalid(e.to_string()))?;
    match value {
        serde_yaml::Value::Mapping(raw) => Ok(FrontMatter::from_yaml(&raw)),
        serde_yaml::Value::Null => Ok(FrontMatter::default()),
        _ => Err(invalid("expected a mapping of keys to values".to_string())),
    }
}

fn check_duplicate_urls(items: &[ContentItem]) -> Result<(), ScanError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for item in items {
        if let Some(first) = seen.insert(&item.url, &item.input_path) {
            return Err(ScanError::DuplicateUrl {
                url: item.url.clone(),
                first: first.to_string(),
                second: item.input_path.clone(),
            });
        }
    }
    Ok(())
}
