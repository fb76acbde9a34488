//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return [`DbResult`].
//!
//! [`DbResult`]: crate::DbResult

pub mod character_repo;
pub mod dialogue_repo;
pub mod inventory_repo;
pub mod item_repo;
pub mod profile_repo;
pub mod quest_participation_repo;
pub mod quest_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use dialogue_repo::DialogueRepo;
pub use inventory_repo::InventoryRepo;
pub use item_repo::ItemRepo;
pub use profile_repo::ProfileRepo;
pub use quest_participation_repo::QuestParticipationRepo;
pub use quest_repo::QuestRepo;
pub use user_repo::UserRepo;
