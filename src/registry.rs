//! Name → function table handed to the rendering layer.
//!
//! The registry is built once at startup and then only read. It binds the
//! template-facing filter names to the typed functions in [`crate::filters`]
//! and holds the named collection definitions from the site config.
//!
//! Templates deal in loosely-typed values, so registered filters take and
//! return [`serde_json::Value`]. The adapters here do the narrowing: wrong or
//! missing arguments are treated as empty input, never as an error.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::collections::{Collection, CollectionSpec, ContentLocator};
use crate::config::SiteConfig;
use crate::dates;
use crate::filters;
use crate::glob::{Pattern, PatternError};

pub const GET_SLUG: &str = "getSlug";
pub const GET_TUTORIAL_NAME: &str = "getTutorialName";
pub const STARTS_WITH: &str = "startsWith";
pub const HTML_DATE_STRING: &str = "htmlDateString";
pub const GET_MONTH_YEAR_FROM_URL: &str = "getMonthYearFromUrl";

/// A template filter: positional arguments in, one value out.
pub type FilterFn = fn(&[Value]) -> Value;

/// Immutable after construction; safe to share across render threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    filters: BTreeMap<&'static str, FilterFn>,
    collections: BTreeMap<String, CollectionSpec>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five standard filters, no collections.
    pub fn with_standard_filters() -> Self {
        Self::new()
            .with_filter(GET_SLUG, slug_filter)
            .with_filter(GET_TUTORIAL_NAME, tutorial_name_filter)
            .with_filter(STARTS_WITH, starts_with_filter)
            .with_filter(HTML_DATE_STRING, html_date_filter)
            .with_filter(GET_MONTH_YEAR_FROM_URL, month_year_filter)
    }

    /// Standard filters plus every collection defined in the config.
    pub fn from_config(config: &SiteConfig) -> Result<Self, PatternError> {
        let mut registry = Self::with_standard_filters();
        for (name, def) in &config.collections {
            let pattern = Pattern::new(&def.pattern)?;
            registry = registry.with_collection(CollectionSpec::new(name, pattern, def.policy));
        }
        Ok(registry)
    }

    /// Bind a filter name. A later binding replaces an earlier one.
    pub fn with_filter(mut self, name: &'static str, filter: FilterFn) -> Self {
        self.filters.insert(name, filter);
        self
    }

    /// Add a named collection. A later definition replaces an earlier one.
    pub fn with_collection(mut self, collection: CollectionSpec) -> Self {
        self.collections.insert(collection.name.clone(), collection);
        self
    }

    pub fn filter(&self, name: &str) -> Option<FilterFn> {
        self.filters.get(name).copied()
    }

    /// Run a filter by name. `None` only when the name is not registered.
    pub fn apply(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.filter(name).map(|f| f(args))
    }

    /// Registered filter names, sorted.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.keys().copied()
    }

    /// Collection definitions, sorted by name.
    pub fn collections(&self) -> impl Iterator<Item = &CollectionSpec> + '_ {
        self.collections.values()
    }

    pub fn collection(&self, name: &str) -> Option<&CollectionSpec> {
        self.collections.get(name)
    }

    /// Assemble every named collection against one locator, in name order.
    pub fn assemble<'a, L>(&self, locator: &'a L) -> Vec<Collection<'a>>
    where
        L: ContentLocator + ?Sized,
    {
        self.collections
            .values()
            .map(|collection| collection.assemble(locator))
            .collect()
    }
}

// ============================================================================
// Value adapters
// ============================================================================

fn str_arg(args: &[Value], index: usize) -> Option<&str> {
    args.get(index).and_then(Value::as_str)
}

fn slug_filter(args: &[Value]) -> Value {
    Value::String(filters::get_slug(str_arg(args, 0).unwrap_or_default()))
}

fn tutorial_name_filter(args: &[Value]) -> Value {
    Value::String(filters::get_tutorial_name(
        str_arg(args, 0).unwrap_or_default(),
    ))
}

fn starts_with_filter(args: &[Value]) -> Value {
    Value::Bool(filters::starts_with(
        str_arg(args, 0),
        str_arg(args, 1).unwrap_or_default(),
    ))
}

/// Accepts a date string or epoch milliseconds.
fn html_date_filter(args: &[Value]) -> Value {
    let date = match args.first() {
        Some(Value::String(s)) => dates::parse_date_str(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(chrono::DateTime::from_timestamp_millis),
        _ => None,
    };
    Value::String(
        date.map(|d| filters::html_date_string(&d))
            .unwrap_or_default(),
    )
}

fn month_year_filter(args: &[Value]) -> Value {
    Value::String(filters::get_month_year_from_url(
        str_arg(args, 0).unwrap_or_default(),
    ))
}
