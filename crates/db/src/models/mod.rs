//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where the
//!   entity has mutable columns

pub mod character;
pub mod dialogue;
pub mod inventory;
pub mod item;
pub mod profile;
pub mod quest;
pub mod quest_participation;
pub mod status;
pub mod user;
