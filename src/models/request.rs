//! Magazine access request records (admin-only collection).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::listing::SortKey;

use super::record::{de, parse_timestamp, ContentRecord, Lang};

/// A school or reader asking for printed magazine copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagazineRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub order: i64,
    #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool")]
    pub visible: bool,
    #[serde(default)]
    pub requester: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub email: String,
    /// Issue code the request is about.
    #[serde(default)]
    pub magazine_code: String,
    /// `pending`, `approved`, or `declined`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for MagazineRequest {
    const COLLECTION: &'static str = "requests";

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
            &self.requester,
            &self.school,
            &self.email,
            &self.magazine_code,
        ]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }

    fn chronology(&self) -> i64 {
        parse_timestamp(&self.submitted_at)
    }

    fn display_name(&self, _lang: Lang) -> &str {
        &self.requester
    }

    fn default_sort() -> SortKey {
        SortKey::Newest
    }
}
