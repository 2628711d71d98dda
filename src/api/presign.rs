//! Presign endpoint for direct-to-storage uploads.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::ApiResult;
use crate::errors::AppError;
use crate::media::MediaResolver;
use crate::storage;
use crate::AppState;

/// Presign request: where the file goes and what it is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignRequest {
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
}

/// Presign response: upload target plus the resulting object key, which the
/// client records on its content record after the storage upload succeeds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResponse {
    pub ok: bool,
    pub url: String,
    pub fields: BTreeMap<String, String>,
    pub key: String,
    pub public_url: String,
}

/// POST /api/admin/uploads/presign - Issue an upload target.
pub async fn presign_upload(
    State(state): State<AppState>,
    Json(request): Json<PresignRequest>,
) -> ApiResult<PresignResponse> {
    let folder = request.folder.trim().trim_matches('/');
    if folder.is_empty() {
        return Err(AppError::Validation("folder is required".to_string()));
    }
    if folder.split('/').any(|part| part.is_empty() || part == "..") {
        return Err(AppError::Validation(format!("Invalid folder '{}'", folder)));
    }

    let file_name = request.file_name.trim();
    if file_name.is_empty() {
        return Err(AppError::Validation("fileName is required".to_string()));
    }

    let content_type = request.content_type.trim();
    let content_type = if content_type.is_empty() {
        "application/octet-stream"
    } else {
        content_type
    };

    let key = storage::object_key(folder, file_name);
    let upload = state.storage.presign_put(&key, content_type).await?;

    let public_url = MediaResolver::new(&state.config.media_origin).resolve(&key);

    Ok(Json(PresignResponse {
        ok: true,
        url: upload.url,
        fields: upload.fields,
        key,
        public_url,
    }))
}
