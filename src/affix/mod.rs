//! Affix system

pub mod catalog;
pub mod modifier;
pub mod template;

pub use catalog::{AffixCatalog, CatalogData, SlotPool};
pub use modifier::{DamageType, ModifierKind, ModifierScope, ModifierTemplate, Stat, ValueRange};
pub use template::{AffixCategory, AffixSlot, AffixTemplate, Tier};
