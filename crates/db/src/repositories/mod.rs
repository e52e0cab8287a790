//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attributes_repo;
pub mod character_repo;
pub mod game_repo;

pub use attributes_repo::AttributesRepo;
pub use character_repo::CharacterRepo;
pub use game_repo::GameRepo;
