//! Domain model structs and DTOs.
//!
//! `listing` contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO with wire-level-optional fields
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod listing;
