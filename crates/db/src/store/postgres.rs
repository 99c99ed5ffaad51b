//! Postgres-backed listing store.
//!
//! Plain repository queries over the `listings` table; single-document
//! atomicity is whatever Postgres provides natively, no extra locking.

use async_trait::async_trait;
use haven_core::types::DbId;
use sqlx::PgPool;

use super::{ListingStore, StoreError};
use crate::models::listing::{Listing, NewListing, UpdateListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, price, location, transaction_type, \
                       property_type, land_category, owner_name, photos, booked, \
                       created_at, updated_at";

/// Listing store backed by the `listings` table.
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn list(&self) -> Result<Vec<Listing>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM listings ORDER BY created_at DESC");
        Ok(sqlx::query_as::<_, Listing>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get(&self, id: DbId) -> Result<Option<Listing>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        Ok(sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, input: NewListing) -> Result<Listing, StoreError> {
        let query = format!(
            "INSERT INTO listings (title, description, price, location, transaction_type,
                                   property_type, land_category, owner_name, photos, booked)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Listing>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.location)
            .bind(input.transaction_type)
            .bind(input.property_type)
            .bind(input.land_category)
            .bind(&input.owner_name)
            .bind(&input.photos)
            .bind(input.booked)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateListing,
    ) -> Result<Option<Listing>, StoreError> {
        let query = format!(
            "UPDATE listings SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                location = COALESCE($5, location),
                transaction_type = COALESCE($6, transaction_type),
                property_type = COALESCE($7, property_type),
                land_category = COALESCE($8, land_category),
                owner_name = COALESCE($9, owner_name),
                photos = COALESCE($10, photos),
                booked = COALESCE($11, booked),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(patch.price)
            .bind(&patch.location)
            .bind(patch.transaction_type)
            .bind(patch.property_type)
            .bind(patch.land_category)
            .bind(&patch.owner_name)
            .bind(&patch.photos)
            .bind(patch.booked)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: DbId) -> Result<Option<Listing>, StoreError> {
        let query = format!("DELETE FROM listings WHERE id = $1 RETURNING {COLUMNS}");
        Ok(sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
