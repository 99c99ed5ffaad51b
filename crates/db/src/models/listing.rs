//! Listing entity model and DTOs.
//!
//! The wire format is camelCase JSON with the id rendered as a string, so
//! browser clients see one shape regardless of which backend served it.

use haven_core::error::CoreError;
use haven_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;

/// Display label applied when a creator does not name an owner.
pub const DEFAULT_OWNER_NAME: &str = "Owner A";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a listing is offered. Prices are per-month for rentals and total
/// for sales.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Rental,
    Sale,
}

/// The kind of property a listing describes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "property_type", rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Villa,
    Studio,
    Land,
}

impl PropertyType {
    /// Every property type, in display order.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Studio,
        PropertyType::Land,
    ];
}

/// Land sub-category. Only meaningful when the property type is `Land`;
/// the backend stores whatever the client sends without cross-checking
/// the two fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "land_category", rename_all = "lowercase")]
pub enum LandCategory {
    Commercial,
    Farming,
    /// The empty string, carried by every non-land listing.
    #[default]
    #[serde(rename = "")]
    #[sqlx(rename = "")]
    Unspecified,
}

// ---------------------------------------------------------------------------
// Entity struct
// ---------------------------------------------------------------------------

/// A listing record. The same shape is served from both backends;
/// `created_at` / `updated_at` exist only on the durable backend and are
/// omitted from JSON when unset.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub land_category: LandCategory,
    pub owner_name: String,
    pub photos: Vec<String>,
    pub booked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

fn id_as_string<S>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a listing. Every field is optional at the wire level;
/// [`CreateListing::validate`] enforces the required ones and resolves the
/// documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub property_type: Option<PropertyType>,
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "lenient_photos")]
    pub photos: Vec<String>,
    pub land_category: Option<LandCategory>,
    pub booked: Option<bool>,
}

/// A fully-resolved listing payload: required fields checked, defaults
/// applied. Both store backends persist exactly these values, which keeps
/// default-field population identical across them.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub owner_name: String,
    pub photos: Vec<String>,
    pub land_category: LandCategory,
    pub booked: bool,
}

impl CreateListing {
    /// Check required fields and resolve defaults.
    ///
    /// `title` must be present and non-empty; `price` must be present
    /// (zero is allowed).
    pub fn validate(self) -> Result<NewListing, CoreError> {
        let title = self.title.filter(|t| !t.is_empty());
        let (Some(title), Some(price)) = (title, self.price) else {
            return Err(CoreError::Validation(
                "title and price are required".to_string(),
            ));
        };
        Ok(NewListing {
            title,
            description: self.description.unwrap_or_default(),
            price,
            location: self.location.unwrap_or_default(),
            transaction_type: self.transaction_type.unwrap_or_default(),
            property_type: self.property_type.unwrap_or_default(),
            owner_name: self
                .owner_name
                .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            photos: self.photos,
            land_category: self.land_category.unwrap_or_default(),
            booked: self.booked.unwrap_or(false),
        })
    }
}

impl NewListing {
    /// Realize a record with a store-assigned id. Timestamps are left
    /// unset; the durable backend manages its own.
    pub fn into_listing(self, id: DbId) -> Listing {
        Listing {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            location: self.location,
            transaction_type: self.transaction_type,
            property_type: self.property_type,
            land_category: self.land_category,
            owner_name: self.owner_name,
            photos: self.photos,
            booked: self.booked,
            created_at: None,
            updated_at: None,
        }
    }
}

/// DTO for updating a listing. Only supplied fields change; a field cannot
/// be removed, only replaced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub property_type: Option<PropertyType>,
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "lenient_photos_opt")]
    pub photos: Option<Vec<String>>,
    pub land_category: Option<LandCategory>,
    pub booked: Option<bool>,
}

// ---------------------------------------------------------------------------
// Lenient photo deserialization
// ---------------------------------------------------------------------------

/// Accept any JSON value for `photos`: arrays keep their string entries,
/// anything else becomes an empty list.
fn lenient_photos<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(photos_from_value(value))
}

/// Same leniency for patches: an absent field stays `None` (handled by
/// `#[serde(default)]`), a supplied non-array clears the photos.
fn lenient_photos_opt<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(photos_from_value(value)))
}

fn photos_from_value(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
