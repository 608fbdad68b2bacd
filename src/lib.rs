//! Gloomforge - A procedural affix and item generation engine
//!
//! Rolls randomized items the way an action RPG does: a catalog of tiered
//! affix templates, tag-based compatibility against base items, level-gated
//! tiers, and deterministic seeded generation.

pub mod affix;
pub mod data;
pub mod error;
pub mod gen;
pub mod item;

// Re-export the main entry points
pub use affix::AffixCatalog;
pub use error::{CatalogError, GenerateError};
pub use gen::{generate_drops, generate_item, generate_item_with_rng, Rarity, RarityPolicy};
pub use item::{BaseItem, GeneratedItem};
