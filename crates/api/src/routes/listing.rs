//! Route definitions for the `/listings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// GET    /listings        -> list
/// POST   /listings        -> create
/// GET    /listings/{id}   -> get_by_id
/// PUT    /listings/{id}   -> update
/// DELETE /listings/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/listings", get(listing::list).post(listing::create))
        .route(
            "/listings/{id}",
            get(listing::get_by_id)
                .put(listing::update)
                .delete(listing::delete),
        )
}
