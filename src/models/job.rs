//! Careers listing records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::listing::SortKey;

use super::record::{de, parse_timestamp, pick, ContentRecord, Lang};

/// An open position on the careers page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
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
    pub location: String,
    /// `full-time`, `part-time`, `consultant`, `volunteer`.
    #[serde(default)]
    pub employment_type: String,
    /// Application deadline as a date string.
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub summary_en: String,
    #[serde(default)]
    pub summary_tet: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord for JobPosting {
    const COLLECTION: &'static str = "jobs";

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
            &self.location,
            &self.employment_type,
        ]
    }

    fn filter_value(&self, name: &str) -> Option<String> {
        match name {
            "employmentType" => Some(self.employment_type.clone()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn chronology(&self) -> i64 {
        parse_timestamp(&self.deadline)
    }

    fn display_name(&self, lang: Lang) -> &str {
        pick(lang, &self.title_en, &self.title_tet)
    }

    fn default_sort() -> SortKey {
        SortKey::Newest
    }
}
