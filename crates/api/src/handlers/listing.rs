//! Handlers for the `/listings` resource.
//!
//! Ids arrive as raw path strings and are normalized to string form in
//! every response; a path id that does not parse behaves like any other
//! unknown id (404). Malformed JSON bodies map to 400, not axum's
//! default 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use haven_core::types::DbId;
use haven_db::models::listing::{CreateListing, Listing, UpdateListing};
use haven_media::materialize_photos;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /listings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Listing>>> {
    let listings = state.store.list().await?;
    Ok(Json(listings))
}

/// GET /listings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Listing>> {
    let listing = match parse_id(&id) {
        Some(parsed) => state.store.get(parsed).await?,
        None => None,
    };
    listing
        .map(Json)
        .ok_or_else(|| AppError::listing_not_found(id))
}

/// POST /listings
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateListing>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    let Json(input) = body.map_err(bad_json)?;
    let mut input = input.validate()?;
    input.photos = materialize_photos(state.media.as_deref(), input.photos).await;

    let listing = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// PUT /listings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateListing>, JsonRejection>,
) -> AppResult<Json<Listing>> {
    let Json(mut patch) = body.map_err(bad_json)?;
    if let Some(photos) = patch.photos.take() {
        patch.photos = Some(materialize_photos(state.media.as_deref(), photos).await);
    }

    let updated = match parse_id(&id) {
        Some(parsed) => state.store.update(parsed, patch).await?,
        None => None,
    };
    updated
        .map(Json)
        .ok_or_else(|| AppError::listing_not_found(id))
}

/// DELETE /listings/{id} -- returns the removed record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Listing>> {
    let removed = match parse_id(&id) {
        Some(parsed) => state.store.delete(parsed).await?,
        None => None,
    };
    removed
        .map(Json)
        .ok_or_else(|| AppError::listing_not_found(id))
}

fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}

fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
