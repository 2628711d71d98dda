//! Listing filter/sort pipeline.
//!
//! Transforms a raw collection plus user-controlled inputs (free-text query,
//! categorical filter selections, sort key) into an ordered, filtered view.
//! The derivation is pure: the input slice is never mutated and identical
//! inputs always produce identical output.

use std::collections::{BTreeMap, HashMap};

use crate::models::{ContentRecord, Lang};

/// Enumerated sort policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Chronology descending, natural identifier ascending on ties.
    Newest,
    /// Chronology ascending, natural identifier ascending on ties.
    Oldest,
    /// Case-insensitive active-language display name, identifier on ties.
    Name,
    /// Chronology descending, then manual order, then identifier.
    Editorial,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<SortKey> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "name" => Some(SortKey::Name),
            "editorial" => Some(SortKey::Editorial),
            _ => None,
        }
    }
}

/// Who the view is for. Public views never contain invisible records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Public,
    Admin,
}

/// Sentinel filter selection meaning "no selection".
const FILTER_ALL: &str = "all";

/// User-controlled inputs to the pipeline.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub q: String,
    pub filters: BTreeMap<String, String>,
    pub sort: SortKey,
    pub lang: Lang,
}

impl ListQuery {
    pub fn new(sort: SortKey) -> Self {
        Self {
            q: String::new(),
            filters: BTreeMap::new(),
            sort,
            lang: Lang::En,
        }
    }

    /// Build from HTTP query parameters.
    ///
    /// `q`, `sort`, and `lang` are reserved names; every other parameter is
    /// a categorical filter. Blank and `"all"` selections are no-ops, as is
    /// an unrecognized sort.
    pub fn from_params(params: &HashMap<String, String>, default_sort: SortKey) -> Self {
        let mut query = ListQuery::new(default_sort);
        for (name, value) in params {
            match name.as_str() {
                "q" => query.q = value.clone(),
                "sort" => {
                    if let Some(sort) = SortKey::parse(value) {
                        query.sort = sort;
                    }
                }
                "lang" => query.lang = Lang::parse(value),
                _ => {
                    if !value.is_empty() && value != FILTER_ALL {
                        query.filters.insert(name.clone(), value.clone());
                    }
                }
            }
        }
        query
    }

    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }
}

/// Apply the pipeline: audience scope, free-text search, categorical
/// filters, then sort. Returns a fresh vector.
pub fn apply<T: ContentRecord>(items: &[T], query: &ListQuery, audience: Audience) -> Vec<T> {
    let needle = query.q.trim().to_lowercase();

    let mut view: Vec<T> = items
        .iter()
        .filter(|item| audience == Audience::Admin || item.visible())
        .filter(|item| matches_query(*item, &needle))
        .filter(|item| matches_filters(*item, &query.filters))
        .cloned()
        .collect();

    sort(&mut view, query.sort, query.lang);
    view
}

fn matches_query<T: ContentRecord>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters<T: ContentRecord>(item: &T, filters: &BTreeMap<String, String>) -> bool {
    filters.iter().all(|(name, selected)| {
        match item.filter_value(name) {
            Some(value) => value == *selected,
            // Undesignated filter names are no-ops
            None => true,
        }
    })
}

fn sort<T: ContentRecord>(view: &mut [T], key: SortKey, lang: Lang) {
    match key {
        SortKey::Newest => view.sort_by(|a, b| {
            b.chronology()
                .cmp(&a.chronology())
                .then_with(|| a.tiebreak().cmp(b.tiebreak()))
        }),
        SortKey::Oldest => view.sort_by(|a, b| {
            a.chronology()
                .cmp(&b.chronology())
                .then_with(|| a.tiebreak().cmp(b.tiebreak()))
        }),
        SortKey::Name => view.sort_by_cached_key(|item| {
            (
                item.display_name(lang).to_lowercase(),
                item.tiebreak().to_string(),
            )
        }),
        SortKey::Editorial => view.sort_by(|a, b| {
            b.chronology()
                .cmp(&a.chronology())
                .then_with(|| a.order().cmp(&b.order()))
                .then_with(|| a.tiebreak().cmp(b.tiebreak()))
        }),
    }
}
