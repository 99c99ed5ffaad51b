//! Dual-backend listing store.
//!
//! One interface, two implementations selected once at process start:
//! [`PgListingStore`] when a database URL is configured and reachable,
//! [`MemoryListingStore`] otherwise. Both agree exactly on NotFound
//! semantics (`Ok(None)`, never an error) and on default-field population
//! (resolved into [`NewListing`] before either backend sees the record).

mod memory;
mod postgres;
mod seed;

pub use memory::MemoryListingStore;
pub use postgres::PgListingStore;

use async_trait::async_trait;
use haven_core::types::DbId;

use crate::models::listing::{Listing, NewListing, UpdateListing};

/// Error type for store operations. Missing rows are reported through
/// `Ok(None)` on the relevant operations, not through this type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract shared by both backends.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// All listings: newest first on the durable backend, insertion order
    /// in memory.
    async fn list(&self) -> Result<Vec<Listing>, StoreError>;

    /// Fetch one listing by id.
    async fn get(&self, id: DbId) -> Result<Option<Listing>, StoreError>;

    /// Insert a new listing, assigning its id.
    async fn create(&self, input: NewListing) -> Result<Listing, StoreError>;

    /// Apply the supplied fields, leaving the rest untouched.
    async fn update(&self, id: DbId, patch: UpdateListing)
        -> Result<Option<Listing>, StoreError>;

    /// Remove and return the listing.
    async fn delete(&self, id: DbId) -> Result<Option<Listing>, StoreError>;
}
