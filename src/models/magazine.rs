//! Magazine catalog records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::listing::SortKey;
use crate::media::MediaResolver;

use super::record::{de, pick, ContentRecord, Lang};

/// A magazine issue in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool")]
    pub visible: bool,
    /// Issue code, e.g. `LK-1-2016`.
    #[serde(default)]
    pub code: String,
    /// Series the issue belongs to (`kiik`, `prima`, `komunidade`, `manorin`).
    #[serde(default)]
    pub series: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub year: i64,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_tet: String,
    #[serde(default)]
    pub excerpt_en: String,
    #[serde(default)]
    pub excerpt_tet: String,
    /// Cover image reference (object key or full URL).
    #[serde(default)]
    pub cover_image: String,
    /// Sample page references, in reading order.
    #[serde(default)]
    pub sample_pages: Vec<String>,
    /// Fields this backend does not model, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for Magazine {
    const COLLECTION: &'static str = "magazines";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title_en, &self.title_tet, &self.code, &self.series]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "series" => Some(self.series.clone()),
            "year" => Some(self.year.to_string()),
            _ => None,
        }
    }

    fn chronology(&self) -> i64 {
        self.year
    }

    fn display_name(&self, lang: Lang) -> &str {
        pick(lang, &self.title_en, &self.title_tet)
    }

    fn tiebreak(&self) -> &str {
        if self.code.is_empty() {
            &self.id
        } else {
            &self.code
        }
    }

    fn default_sort() -> SortKey {
        SortKey::Newest
    }

    fn resolve_media(&mut self, resolver: &MediaResolver) {
        resolver.resolve_in_place(&mut self.cover_image);
        for page in &mut self.sample_pages {
            resolver.resolve_in_place(page);
        }
    }
}
