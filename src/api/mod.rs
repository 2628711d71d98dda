//! REST API module.
//!
//! Response envelopes follow the frontend contract: listings are
//! `{ ok, items }`, saves are `{ ok }`, failures are `{ ok: false, error }`.

mod collections;
mod presign;

pub use collections::*;
pub use presign::*;

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Listing response envelope.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub ok: bool,
    pub items: Vec<T>,
}

/// Save response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub ok: bool,
}

/// Full-collection save payload.
#[derive(Debug, Deserialize)]
pub struct SaveRequest<T> {
    pub items: Vec<T>,
}

/// Response type that is either a JSON body or an error envelope.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create a successful listing response.
pub fn items<T: Serialize>(items: Vec<T>) -> ApiResult<ItemsResponse<T>> {
    Ok(Json(ItemsResponse { ok: true, items }))
}
