//! Request handlers.
//!
//! Handlers delegate to the listing store behind [`crate::state::AppState`]
//! and map failures via [`crate::error::AppError`].

pub mod listing;
