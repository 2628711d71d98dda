//! Content collection endpoints.
//!
//! One generic handler set serves every collection: public listings,
//! admin listings, and whole-collection saves.

use std::collections::{HashMap, HashSet};

use axum::extract::{Query, State};
use axum::Json;

use super::{items, ApiResult, ItemsResponse, SaveRequest, SaveResponse};
use crate::errors::AppError;
use crate::listing::{self, Audience, ListQuery};
use crate::media::MediaResolver;
use crate::models::ContentRecord;
use crate::AppState;

/// GET handler for public listings.
///
/// Visibility-scoped and pipeline-backed; media references are resolved to
/// full URLs for rendering.
pub async fn list_public<T: ContentRecord>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<ItemsResponse<T>> {
    let collection = state.repo.list::<T>().await?;
    let query = ListQuery::from_params(&params, T::default_sort());
    let mut view = listing::apply(&collection, &query, Audience::Public);

    let resolver = MediaResolver::new(&state.config.media_origin);
    for item in &mut view {
        item.resolve_media(&resolver);
    }

    items(view)
}

/// GET handler for admin listings.
///
/// Invisible records included; media references returned raw so the edit
/// round trip stores keys, not URLs.
pub async fn list_admin<T: ContentRecord>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<ItemsResponse<T>> {
    let collection = state.repo.list::<T>().await?;
    let query = ListQuery::from_params(&params, T::default_sort());
    items(listing::apply(&collection, &query, Audience::Admin))
}

/// PUT handler replacing a collection wholesale.
///
/// The payload is the admin session's full working copy; none of its edits
/// were durable before reaching this endpoint.
pub async fn save_collection<T: ContentRecord>(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest<T>>,
) -> ApiResult<SaveResponse> {
    let mut seen = HashSet::new();
    for item in &request.items {
        if !item.id().is_empty() && !seen.insert(item.id().to_string()) {
            return Err(AppError::Validation(format!(
                "Duplicate record id '{}'",
                item.id()
            )));
        }
    }

    let saved = state.repo.replace(request.items).await?;
    tracing::info!("Saved {} {} records", saved.len(), T::COLLECTION);

    Ok(Json(SaveResponse { ok: true }))
}
