//! Team member records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::media::MediaResolver;

use super::record::{de, ContentRecord, Lang};

/// A team member on the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool")]
    pub visible: bool,
    pub name: String,
    #[serde(default)]
    pub role_en: String,
    #[serde(default)]
    pub role_tet: String,
    #[serde(default)]
    pub bio_en: String,
    #[serde(default)]
    pub bio_tet: String,
    #[serde(default)]
    pub photo: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for TeamMember {
    const COLLECTION: &'static str = "team";

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
        vec![&self.name, &self.role_en, &self.role_tet]
    }

    fn filter_value(&self, _name: &str) -> Option<String> {
        None
    }

    fn display_name(&self, _lang: Lang) -> &str {
        &self.name
    }

    fn resolve_media(&mut self, resolver: &MediaResolver) {
        resolver.resolve_in_place(&mut self.photo);
    }
}
