//! Photo gallery records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::media::MediaResolver;

use super::record::{de, parse_timestamp, pick, ContentRecord, Lang};

/// A photo in the public gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool")]
    pub visible: bool,
    #[serde(default)]
    pub caption_en: String,
    #[serde(default)]
    pub caption_tet: String,
    /// Album the photo is grouped under.
    #[serde(default)]
    pub album: String,
    /// Image reference (object key or full URL).
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub taken_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for GalleryPhoto {
    const COLLECTION: &'static str = "gallery";

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
        vec![&self.caption_en, &self.caption_tet, &self.album]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "album" => Some(self.album.clone()),
            _ => None,
        }
    }

    fn chronology(&self) -> i64 {
        parse_timestamp(&self.taken_at)
    }

    fn display_name(&self, lang: Lang) -> &str {
        pick(lang, &self.caption_en, &self.caption_tet)
    }

    fn resolve_media(&mut self, resolver: &MediaResolver) {
        resolver.resolve_in_place(&mut self.image);
    }
}
