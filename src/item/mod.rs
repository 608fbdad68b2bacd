//! Item definitions and generated output

pub mod base;
pub mod generated;

pub use base::{ArmourStats, BaseItem, FamilyKind, ItemFamily, Tag, WeaponStats};
pub use generated::{GeneratedItem, ModifierTotals, RolledAffix, RolledModifier};
