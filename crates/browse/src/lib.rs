//! Pure query/filter layer over a fetched listing collection.
//!
//! Browse views re-derive everything from scratch on each call: the same
//! collection and selector in always produce the same subset and counts
//! out. Nothing here performs I/O or mutates the collection; at catalog
//! scale no incremental indexing is attempted.

use std::collections::BTreeMap;

use haven_db::models::listing::{LandCategory, Listing, PropertyType, TransactionType};
use serde::Serialize;

/// Listings rendered per section when rental and sale are shown side by
/// side. An explicit transaction-type filter lifts the cap.
pub const SECTION_CAP: usize = 10;

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Browse-view selector. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    pub property_type: Option<PropertyType>,
    pub transaction_type: Option<TransactionType>,
    /// Applied only when the selected property type is `Land`.
    pub land_category: Option<LandCategory>,
    /// Case-insensitive substring match against the listing location.
    pub location: Option<String>,
}

impl Selector {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        if let Some(transaction_type) = self.transaction_type {
            if listing.transaction_type != transaction_type {
                return false;
            }
        }
        if self.property_type == Some(PropertyType::Land) {
            if let Some(category) = self.land_category {
                if listing.land_category != category {
                    return false;
                }
            }
        }
        if let Some(needle) = &self.location {
            if !listing
                .location
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// All listings matching the selector, in collection order, uncapped.
pub fn filter<'a>(listings: &'a [Listing], selector: &Selector) -> Vec<&'a Listing> {
    listings.iter().filter(|l| selector.matches(l)).collect()
}

// ---------------------------------------------------------------------------
// Side-by-side sections
// ---------------------------------------------------------------------------

/// Rental and sale sections shown side by side.
#[derive(Debug)]
pub struct Sections<'a> {
    pub rentals: Vec<&'a Listing>,
    pub sales: Vec<&'a Listing>,
}

/// Both transaction types at once, each section capped at
/// [`SECTION_CAP`]. The selector's own transaction type is ignored here;
/// each section fixes its own.
pub fn sections<'a>(listings: &'a [Listing], selector: &Selector) -> Sections<'a> {
    Sections {
        rentals: section(listings, selector, TransactionType::Rental),
        sales: section(listings, selector, TransactionType::Sale),
    }
}

fn section<'a>(
    listings: &'a [Listing],
    selector: &Selector,
    transaction_type: TransactionType,
) -> Vec<&'a Listing> {
    let selector = Selector {
        transaction_type: Some(transaction_type),
        ..selector.clone()
    };
    listings
        .iter()
        .filter(|l| selector.matches(l))
        .take(SECTION_CAP)
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregate counts
// ---------------------------------------------------------------------------

/// Availability partition for one property type. Every listing of the
/// type falls into exactly one bucket, keyed by transaction type and the
/// `booked` flag alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityCounts {
    pub rental_available: usize,
    pub rental_booked: usize,
    pub sale_available: usize,
    pub sale_booked: usize,
}

impl AvailabilityCounts {
    /// Listings counted across the four buckets.
    pub fn total(&self) -> usize {
        self.rental_available + self.rental_booked + self.sale_available + self.sale_booked
    }
}

/// Per-property-type availability breakdown over the whole collection.
///
/// Every property type appears in the result, including ones with no
/// listings.
pub fn availability_by_type(listings: &[Listing]) -> BTreeMap<PropertyType, AvailabilityCounts> {
    let mut counts: BTreeMap<_, _> = PropertyType::ALL
        .into_iter()
        .map(|t| (t, AvailabilityCounts::default()))
        .collect();
    for listing in listings {
        let entry = counts.entry(listing.property_type).or_default();
        let bucket = match (listing.transaction_type, listing.booked) {
            (TransactionType::Rental, false) => &mut entry.rental_available,
            (TransactionType::Rental, true) => &mut entry.rental_booked,
            (TransactionType::Sale, false) => &mut entry.sale_available,
            (TransactionType::Sale, true) => &mut entry.sale_booked,
        };
        *bucket += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Display ordering
// ---------------------------------------------------------------------------

/// Newest first by id. The in-memory backend appends, so clients re-sort
/// for display; the durable backend already serves reverse-chronological.
pub fn newest_first(mut listings: Vec<&Listing>) -> Vec<&Listing> {
    listings.sort_by(|a, b| b.id.cmp(&a.id));
    listings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
