//! In-memory listing store.
//!
//! Process-lifetime fallback used when no database is configured. Holds
//! the catalog in a lock-guarded `Vec` with a monotonically increasing id
//! counter, seeded once at construction and torn down with the process.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use haven_core::types::DbId;

use super::{seed, ListingStore, StoreError};
use crate::models::listing::{Listing, NewListing, UpdateListing};

pub struct MemoryListingStore {
    listings: RwLock<Vec<Listing>>,
    next_id: AtomicI64,
}

impl MemoryListingStore {
    /// An empty catalog. Ids start at 1.
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// A catalog pre-populated with the demo fixture.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut listings = store.write();
            for input in seed::catalog() {
                let id = store.next_id.fetch_add(1, Ordering::Relaxed);
                listings.push(input.into_listing(id));
            }
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Listing>> {
        self.listings.read().expect("listing catalog lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Listing>> {
        self.listings
            .write()
            .expect("listing catalog lock poisoned")
    }
}

impl Default for MemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn list(&self) -> Result<Vec<Listing>, StoreError> {
        Ok(self.read().clone())
    }

    async fn get(&self, id: DbId) -> Result<Option<Listing>, StoreError> {
        Ok(self.read().iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, input: NewListing) -> Result<Listing, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let listing = input.into_listing(id);
        self.write().push(listing.clone());
        Ok(listing)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateListing,
    ) -> Result<Option<Listing>, StoreError> {
        let mut listings = self.write();
        let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            listing.title = title;
        }
        if let Some(description) = patch.description {
            listing.description = description;
        }
        if let Some(price) = patch.price {
            listing.price = price;
        }
        if let Some(location) = patch.location {
            listing.location = location;
        }
        if let Some(transaction_type) = patch.transaction_type {
            listing.transaction_type = transaction_type;
        }
        if let Some(property_type) = patch.property_type {
            listing.property_type = property_type;
        }
        if let Some(owner_name) = patch.owner_name {
            listing.owner_name = owner_name;
        }
        if let Some(photos) = patch.photos {
            listing.photos = photos;
        }
        if let Some(land_category) = patch.land_category {
            listing.land_category = land_category;
        }
        if let Some(booked) = patch.booked {
            listing.booked = booked;
        }
        Ok(Some(listing.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<Option<Listing>, StoreError> {
        let mut listings = self.write();
        let Some(pos) = listings.iter().position(|l| l.id == id) else {
            return Ok(None);
        };
        Ok(Some(listings.remove(pos)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
