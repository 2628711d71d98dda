//! Content collection repository.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::ContentRecord;
use crate::session::is_temp_id;

/// Repository over the JSON-row content store.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List a collection in stored position order.
    pub async fn list<T: ContentRecord>(&self) -> Result<Vec<T>, AppError> {
        let rows =
            sqlx::query("SELECT id, body FROM content WHERE collection = ? ORDER BY position")
                .bind(T::COLLECTION)
                .fetch_all(&self.pool)
                .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let body: String = row.get("body");
            match serde_json::from_str::<T>(&body) {
                Ok(item) => items.push(item),
                Err(e) => {
                    // A bad row must not take the whole listing down
                    let id: String = row.get("id");
                    tracing::warn!(
                        "Skipping undecodable {} record {}: {}",
                        T::COLLECTION,
                        id,
                        e
                    );
                }
            }
        }
        Ok(items)
    }

    /// Replace a collection wholesale, in one transaction.
    ///
    /// Orders are renormalized to the array sequence and placeholder
    /// `temp-…` ids get server-assigned ones. Returns the normalized items.
    pub async fn replace<T: ContentRecord>(&self, items: Vec<T>) -> Result<Vec<T>, AppError> {
        let mut normalized = items;
        for (index, item) in normalized.iter_mut().enumerate() {
            item.set_order(index as i64 + 1);
            if item.id().is_empty() || is_temp_id(item.id()) {
                item.set_id(uuid::Uuid::new_v4().to_string());
            }
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM content WHERE collection = ?")
            .bind(T::COLLECTION)
            .execute(&mut *tx)
            .await?;

        for (index, item) in normalized.iter().enumerate() {
            let body = serde_json::to_string(item).map_err(|e| {
                AppError::Internal(format!("Failed to encode {} record: {}", T::COLLECTION, e))
            })?;

            sqlx::query("INSERT INTO content (collection, id, position, body) VALUES (?, ?, ?, ?)")
                .bind(T::COLLECTION)
                .bind(item.id())
                .bind(index as i64 + 1)
                .bind(body)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(normalized)
    }
}
