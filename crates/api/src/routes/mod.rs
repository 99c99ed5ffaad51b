pub mod health;
pub mod listing;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree. Everything is root-mounted; the browser
/// client depends on these exact paths.
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).merge(listing::router())
}
