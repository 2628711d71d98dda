//! Admin editing session over one content collection.
//!
//! The admin surface holds a full copy of a collection in memory; edits
//! accumulate there and take permanent effect only when the whole
//! collection is pushed to the save endpoint. Nothing here autosaves:
//! navigating away with unsaved changes loses them, and callers that want
//! a guard can watch `has_unsaved_changes`.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::models::ContentRecord;

/// Client-generated placeholder id for records that have not been saved yet.
/// The server assigns a permanent id at save time.
pub fn temp_id() -> String {
    let rand = Uuid::new_v4().simple().to_string();
    format!("temp-{}-{}", Utc::now().timestamp_millis(), &rand[..8])
}

/// True for placeholder ids.
pub fn is_temp_id(id: &str) -> bool {
    id.starts_with("temp-")
}

/// One admin session's working copy of a collection.
#[derive(Debug, Clone)]
pub struct AdminSession<T: ContentRecord> {
    items: Vec<T>,
    dirty: bool,
    uploading: HashSet<String>,
}

impl<T: ContentRecord> AdminSession<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            dirty: false,
            uploading: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn is_uploading(&self, id: &str) -> bool {
        self.uploading.contains(id)
    }

    /// Append a new record with a placeholder id and the next order value.
    /// Returns the placeholder id.
    pub fn add(&mut self, mut item: T) -> String {
        let id = temp_id();
        item.set_id(id.clone());
        item.set_order(self.items.len() as i64 + 1);
        self.items.push(item);
        self.dirty = true;
        id
    }

    /// Apply a field edit to the record with the given id.
    pub fn edit(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        apply(item);
        self.dirty = true;
        true
    }

    /// Move a record one step toward the front, renumbering orders densely.
    pub fn move_up(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        self.items.swap(pos - 1, pos);
        self.renumber();
        self.dirty = true;
        true
    }

    /// Move a record one step toward the back, renumbering orders densely.
    pub fn move_down(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if pos + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(pos, pos + 1);
        self.renumber();
        self.dirty = true;
        true
    }

    /// Remove a record, renumbering the remainder densely.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.items.remove(pos);
        self.uploading.remove(id);
        self.renumber();
        self.dirty = true;
        true
    }

    /// Mark a record's upload as in flight so the UI can disable that row.
    /// Uploads on distinct records are independent.
    pub fn begin_upload(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.uploading.insert(id.to_string())
    }

    /// Record a completed upload: clear the row's uploading flag, attach
    /// the object key, and flag unsaved changes. The key is not durable
    /// until the collection is saved.
    pub fn finish_upload(&mut self, id: &str, key: String, attach: impl FnOnce(&mut T, String)) -> bool {
        self.uploading.remove(id);
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        attach(item, key);
        self.dirty = true;
        true
    }

    /// A presign or storage failure aborts the upload; the record is left
    /// exactly as it was.
    pub fn fail_upload(&mut self, id: &str) {
        self.uploading.remove(id);
    }

    /// A successful full-collection save is the only thing that clears the
    /// unsaved-changes flag.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_order(index as i64 + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GalleryPhoto;

    fn photo(id: &str, order: i64) -> GalleryPhoto {
        GalleryPhoto {
            id: id.to_string(),
            order,
            visible: true,
            caption_en: String::new(),
            caption_tet: String::new(),
            album: String::new(),
            image: String::new(),
            taken_at: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    fn session() -> AdminSession<GalleryPhoto> {
        AdminSession::new(vec![photo("a", 1), photo("b", 2), photo("c", 3)])
    }

    fn orders(session: &AdminSession<GalleryPhoto>) -> Vec<(String, i64)> {
        session
            .items()
            .iter()
            .map(|p| (p.id.clone(), p.order))
            .collect()
    }

    #[test]
    fn test_temp_id_shape() {
        let id = temp_id();
        assert!(is_temp_id(&id));
        // temp-<millis>-<random>
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn test_new_session_is_clean() {
        let session = session();
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_add_assigns_temp_id_and_next_order() {
        let mut session = session();
        let id = session.add(photo("", 0));
        assert!(is_temp_id(&id));
        let added = session.items().last().unwrap();
        assert_eq!(added.order, 4);
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_edit_sets_dirty() {
        let mut session = session();
        assert!(session.edit("b", |p| p.caption_en = "Test".to_string()));
        assert!(session.has_unsaved_changes());
        assert_eq!(session.items()[1].caption_en, "Test");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut session = session();
        assert!(!session.edit("zzz", |p| p.caption_en = "Test".to_string()));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_reorder_renumbers_densely() {
        let mut session = session();
        assert!(session.move_up("c"));
        assert_eq!(
            orders(&session),
            vec![
                ("a".to_string(), 1),
                ("c".to_string(), 2),
                ("b".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_move_up_at_front_is_noop() {
        let mut session = session();
        assert!(!session.move_up("a"));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_move_down_at_back_is_noop() {
        let mut session = session();
        assert!(!session.move_down("c"));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_remove_renumbers_densely() {
        let mut session = session();
        assert!(session.remove("b"));
        assert_eq!(
            orders(&session),
            vec![("a".to_string(), 1), ("c".to_string(), 2)]
        );
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_upload_success_attaches_key_and_sets_dirty() {
        let mut session = session();
        assert!(session.begin_upload("a"));
        assert!(session.is_uploading("a"));
        assert!(!session.is_uploading("b"));

        let ok = session.finish_upload("a", "gallery/123_photo.jpg".to_string(), |p, key| {
            p.image = key;
        });
        assert!(ok);
        assert!(!session.is_uploading("a"));
        assert_eq!(session.items()[0].image, "gallery/123_photo.jpg");
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_upload_failure_leaves_record_unchanged() {
        let mut session = session();
        let before = session.items().to_vec();
        assert!(session.begin_upload("a"));
        session.fail_upload("a");
        assert!(!session.is_uploading("a"));
        assert_eq!(session.items()[0].image, before[0].image);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_uploads_on_distinct_rows_are_independent() {
        let mut session = session();
        assert!(session.begin_upload("a"));
        assert!(session.begin_upload("b"));
        session.fail_upload("a");
        assert!(session.is_uploading("b"));
        session.finish_upload("b", "gallery/b.jpg".to_string(), |p, key| p.image = key);
        assert_eq!(session.items()[1].image, "gallery/b.jpg");
        assert_eq!(session.items()[0].image, "");
    }

    #[test]
    fn test_mark_saved_clears_dirty() {
        let mut session = session();
        session.edit("a", |p| p.caption_en = "x".to_string());
        assert!(session.has_unsaved_changes());
        session.mark_saved();
        assert!(!session.has_unsaved_changes());
    }
}
