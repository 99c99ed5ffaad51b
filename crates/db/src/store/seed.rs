//! Deterministic demo catalog for the in-memory backend.
//!
//! One hand-written listing plus five generated listings per property
//! type and transaction type, with per-type photo sets and price bands.
//! Land batches are split 3 commercial / 2 farming. Purely illustrative
//! fixture data.

use crate::models::listing::{
    LandCategory, NewListing, PropertyType, TransactionType, DEFAULT_OWNER_NAME,
};

const APARTMENT_PHOTOS: [&str; 5] = [
    "https://images.unsplash.com/photo-1505691723518-36a5ac3b2a59?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1460317442991-0ec209397118?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505691723499-9ca92b6c1d3a?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505691938895-1758d7feb511?q=80&w=1200&auto=format&fit=crop",
];

const HOUSE_PHOTOS: [&str; 5] = [
    "https://images.unsplash.com/photo-1560185008-b033106af2ce?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1560185009-5bf9f58f0f3b?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1502005229762-cf1b2da7c52f?q=80&w=1200&auto=format&fit=crop",
];

const VILLA_PHOTOS: [&str; 5] = [
    "https://images.unsplash.com/photo-1523217582562-09d0def993a6?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505692794403-34d4982c4d35?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1515263487990-61b07816b324?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1512914890250-3d6018887383?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1494526580598-6022a8d04e6b?q=80&w=1200&auto=format&fit=crop",
];

const STUDIO_PHOTOS: [&str; 5] = [
    "https://images.unsplash.com/photo-1515260161320-1070cf3a2f9d?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1524758870432-af57e54afa26?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1460317442991-0ec209397118?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505691723518-36a5ac3b2a59?q=80&w=1200&auto=format&fit=crop",
];

const LAND_PHOTOS: [&str; 5] = [
    "https://images.unsplash.com/photo-1533669955142-7b42f0baf2a4?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1460357676520-9c1c188b00fa?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1503595855261-9418f48a9917?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1474224017046-182ece80b263?q=80&w=1200&auto=format&fit=crop",
];

/// A five-listing batch sharing a property type, transaction type, and
/// price band. Titles and locations get the 1-based batch index appended.
struct Batch {
    title: &'static str,
    description: &'static str,
    base_price: f64,
    price_step: f64,
    location: &'static str,
    transaction_type: TransactionType,
    property_type: PropertyType,
    photos: &'static [&'static str; 5],
}

const BATCHES: [Batch; 10] = [
    Batch {
        title: "Modern Apartment R",
        description: "Spacious and well-lit apartment near tech hub.",
        base_price: 1_500.0,
        price_step: 100.0,
        location: "Neighborhood",
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::Apartment,
        photos: &APARTMENT_PHOTOS,
    },
    Batch {
        title: "Family House R",
        description: "Family-friendly house with backyard and parking.",
        base_price: 2_500.0,
        price_step: 150.0,
        location: "Greenfield Block",
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::House,
        photos: &HOUSE_PHOTOS,
    },
    Batch {
        title: "Premium House S",
        description: "Detached house with garden and modern interiors.",
        base_price: 12_500_000.0,
        price_step: 500_000.0,
        location: "Lakeview Avenue",
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::House,
        photos: &HOUSE_PHOTOS,
    },
    Batch {
        title: "Resort Villa R",
        description: "Private villa with pool and landscaped lawn.",
        base_price: 6_000.0,
        price_step: 300.0,
        location: "Palm Grove",
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::Villa,
        photos: &VILLA_PHOTOS,
    },
    Batch {
        title: "Signature Villa S",
        description: "Signature luxury villa with premium finishes.",
        base_price: 34_500_000.0,
        price_step: 1_500_000.0,
        location: "Sunset Boulevard",
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::Villa,
        photos: &VILLA_PHOTOS,
    },
    Batch {
        title: "Compact Studio R",
        description: "Furnished studio close to metro and cafes.",
        base_price: 1_200.0,
        price_step: 80.0,
        location: "Downtown Lane",
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::Studio,
        photos: &STUDIO_PHOTOS,
    },
    Batch {
        title: "Urban Studio S",
        description: "Smart studio in a central location.",
        base_price: 3_500_000.0,
        price_step: 150_000.0,
        location: "City Center",
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::Studio,
        photos: &STUDIO_PHOTOS,
    },
    Batch {
        title: "Luxury Apartment S",
        description: "Premium apartment with city views and amenities.",
        base_price: 7_500_000.0,
        price_step: 250_000.0,
        location: "Prime Area",
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::Apartment,
        photos: &APARTMENT_PHOTOS,
    },
    Batch {
        title: "Open Plot R",
        description: "Residential land suitable for temporary lease and storage.",
        base_price: 800.0,
        price_step: 50.0,
        location: "Sector",
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::Land,
        photos: &LAND_PHOTOS,
    },
    Batch {
        title: "Residential Plot S",
        description: "Prime residential land parcel with road access.",
        base_price: 2_500_000.0,
        price_step: 250_000.0,
        location: "Ring Road",
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::Land,
        photos: &LAND_PHOTOS,
    },
];

impl Batch {
    fn listing(&self, index: usize) -> NewListing {
        // Land batches: the first three are commercial, the rest farming.
        let land_category = match self.property_type {
            PropertyType::Land if index <= 3 => LandCategory::Commercial,
            PropertyType::Land => LandCategory::Farming,
            _ => LandCategory::Unspecified,
        };
        NewListing {
            title: format!("{}{index}", self.title),
            description: self.description.to_string(),
            price: self.base_price + index as f64 * self.price_step,
            location: format!("{} {index}", self.location),
            transaction_type: self.transaction_type,
            property_type: self.property_type,
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            photos: self.photos.iter().map(|p| p.to_string()).collect(),
            land_category,
            booked: false,
        }
    }
}

/// The full demo catalog, in a fixed order.
pub(crate) fn catalog() -> Vec<NewListing> {
    let mut out = Vec::with_capacity(1 + BATCHES.len() * 5);

    out.push(NewListing {
        title: "Cozy 2BHK Apartment".to_string(),
        description: "Near city center. Fully furnished.".to_string(),
        price: 1_200.0,
        location: "Downtown".to_string(),
        transaction_type: TransactionType::Rental,
        property_type: PropertyType::Apartment,
        owner_name: DEFAULT_OWNER_NAME.to_string(),
        photos: vec![
            "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1200&auto=format&fit=crop".to_string(),
            "https://images.unsplash.com/photo-1502005229762-cf1b2da7c52f?q=80&w=1200&auto=format&fit=crop".to_string(),
            "https://images.unsplash.com/photo-1501183638710-841dd1904471?q=80&w=1200&auto=format&fit=crop".to_string(),
        ],
        land_category: LandCategory::Unspecified,
        booked: false,
    });

    for batch in &BATCHES {
        for index in 1..=5 {
            out.push(batch.listing(index));
        }
    }
    out
}
