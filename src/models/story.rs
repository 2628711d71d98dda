//! Impact story / news records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::media::MediaResolver;

use super::record::{de, parse_timestamp, pick, ContentRecord, Lang};

/// An impact story shown on the news and about pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool")]
    pub visible: bool,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_tet: String,
    #[serde(default)]
    pub category_en: String,
    #[serde(default)]
    pub category_tet: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub excerpt_en: String,
    #[serde(default)]
    pub excerpt_tet: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for Story {
    const COLLECTION: &'static str = "stories";

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
        vec![
            &self.title_en,
            &self.title_tet,
            &self.category_en,
            &self.category_tet,
        ]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "category" => Some(self.category_en.clone()),
            _ => None,
        }
    }

    fn chronology(&self) -> i64 {
        parse_timestamp(&self.published_at)
    }

    fn display_name(&self, lang: Lang) -> &str {
        pick(lang, &self.title_en, &self.title_tet)
    }

    fn resolve_media(&mut self, resolver: &MediaResolver) {
        resolver.resolve_in_place(&mut self.hero_image);
    }
}
