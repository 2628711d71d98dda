//! Shared behavior of content records.
//!
//! Every collection (magazines, jobs, gallery photos, stories, team members,
//! magazine requests) is a list of bilingual, ordered, visibility-flagged
//! records that tolerate loosely-typed input and carry unknown fields
//! through edit round trips untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::listing::SortKey;
use crate::media::MediaResolver;

/// Site language. Tetun is the primary audience language; English is the
/// partner/donor-facing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Tet,
}

impl Lang {
    pub fn parse(s: &str) -> Lang {
        match s.trim().to_ascii_lowercase().as_str() {
            "tet" | "tetun" => Lang::Tet,
            _ => Lang::En,
        }
    }
}

/// Pick the active-language variant of a bilingual field pair, falling back
/// to the other language when the active one is blank.
pub fn pick<'a>(lang: Lang, en: &'a str, tet: &'a str) -> &'a str {
    let (primary, secondary) = match lang {
        Lang::En => (en, tet),
        Lang::Tet => (tet, en),
    };
    if primary.trim().is_empty() {
        secondary
    } else {
        primary
    }
}

/// Best-effort timeline value for a stored date string.
///
/// Accepts RFC 3339 or plain `YYYY-MM-DD`; anything else is 0 so that
/// comparators never see an unordered value.
pub fn parse_timestamp(s: &str) -> i64 {
    let s = s.trim();
    if s.is_empty() {
        return 0;
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return dt.timestamp();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);
    }
    0
}

/// Lenient deserializers for the loosely-typed JSON this API accepts.
pub mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn default_true() -> bool {
        true
    }

    /// Integers may arrive as JSON numbers, numeric strings, or null.
    /// Anything unparseable coerces to 0.
    pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(coerce_i64(value.as_ref()))
    }

    pub(crate) fn coerce_i64(value: Option<&Value>) -> i64 {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Booleans may arrive as any JSON value; JS truthiness applies
    /// (null, false, 0, and "" are falsy, everything else is truthy).
    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(coerce_bool(value.as_ref()))
    }

    pub(crate) fn coerce_bool(value: Option<&Value>) -> bool {
        match value {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        }
    }
}

/// Behavior shared by every content record type.
pub trait ContentRecord:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection key, also the storage partition name.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn order(&self) -> i64;
    fn set_order(&mut self, order: i64);
    fn visible(&self) -> bool;

    /// Fields the free-text search matches against: both-language
    /// title/name fields, category labels, and any natural identifier.
    fn search_text(&self) -> Vec<&str>;

    /// Designated categorical filter attributes, by wire name.
    /// `None` for names this collection does not designate.
    fn filter_value(&self, name: &str) -> Option<String>;

    /// Numeric timeline position for date sorts; 0 when unknown.
    fn chronology(&self) -> i64 {
        0
    }

    /// Display name used by name sorts, in the active language.
    fn display_name(&self, lang: Lang) -> &str;

    /// Stable secondary sort key.
    fn tiebreak(&self) -> &str {
        self.id()
    }

    /// Sort applied when the request does not name one.
    fn default_sort() -> SortKey {
        SortKey::Editorial
    }

    /// Rewrite media reference fields through the resolver.
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        let _ = resolver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pick_prefers_active_language() {
        assert_eq!(pick(Lang::En, "Hello", "Bondia"), "Hello");
        assert_eq!(pick(Lang::Tet, "Hello", "Bondia"), "Bondia");
    }

    #[test]
    fn test_pick_falls_back_when_blank() {
        assert_eq!(pick(Lang::Tet, "Hello", ""), "Hello");
        assert_eq!(pick(Lang::En, "  ", "Bondia"), "Bondia");
    }

    #[test]
    fn test_lang_parse() {
        assert_eq!(Lang::parse("tet"), Lang::Tet);
        assert_eq!(Lang::parse("Tetun"), Lang::Tet);
        assert_eq!(Lang::parse("en"), Lang::En);
        assert_eq!(Lang::parse("anything-else"), Lang::En);
    }

    #[test]
    fn test_coerce_i64() {
        assert_eq!(de::coerce_i64(Some(&json!(2016))), 2016);
        assert_eq!(de::coerce_i64(Some(&json!("2016"))), 2016);
        assert_eq!(de::coerce_i64(Some(&json!(" 7 "))), 7);
        assert_eq!(de::coerce_i64(Some(&json!("not a year"))), 0);
        assert_eq!(de::coerce_i64(Some(&json!(null))), 0);
        assert_eq!(de::coerce_i64(None), 0);
    }

    #[test]
    fn test_coerce_bool() {
        assert!(de::coerce_bool(Some(&json!(true))));
        assert!(de::coerce_bool(Some(&json!(1))));
        assert!(de::coerce_bool(Some(&json!("yes"))));
        assert!(!de::coerce_bool(Some(&json!(false))));
        assert!(!de::coerce_bool(Some(&json!(0))));
        assert!(!de::coerce_bool(Some(&json!(""))));
        assert!(!de::coerce_bool(Some(&json!(null))));
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2023-05-04T10:00:00Z") > 0);
        assert!(parse_timestamp("2023-05-04") > 0);
        assert_eq!(parse_timestamp(""), 0);
        assert_eq!(parse_timestamp("soon"), 0);
    }

    #[test]
    fn test_parse_timestamp_orders_dates() {
        let earlier = parse_timestamp("2016-03-01");
        let later = parse_timestamp("2018-11-20");
        assert!(earlier < later);
    }
}
