//! Affix catalog
//!
//! The full template collection, partitioned by item family and slot.
//! Loaded once, validated once, then shared read-only across every
//! generation call; nothing here mutates after construction.

use serde::{Deserialize, Serialize};

use super::template::{AffixSlot, AffixTemplate};
use crate::item::FamilyKind;

/// Prefix and suffix template lists for one item family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotPool {
    #[serde(default)]
    pub prefixes: Vec<AffixTemplate>,
    #[serde(default)]
    pub suffixes: Vec<AffixTemplate>,
}

impl SlotPool {
    pub fn templates(&self, slot: AffixSlot) -> &[AffixTemplate] {
        match slot {
            AffixSlot::Prefix => &self.prefixes,
            AffixSlot::Suffix => &self.suffixes,
        }
    }

    fn len(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }
}

/// Raw catalog contents as authored, before validation
///
/// This is the serialization surface; `AffixCatalog::from_data` is the only
/// way to turn it into a usable catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub weapon: SlotPool,
    #[serde(default)]
    pub armour: SlotPool,
    #[serde(default)]
    pub jewellery: SlotPool,
}

/// Validated, immutable affix catalog
///
/// Misconfigured templates (empty tag sets, inverted ranges, no modifiers)
/// are logged and dropped at construction rather than crashing generation
/// later.
#[derive(Debug, Clone)]
pub struct AffixCatalog {
    weapon: SlotPool,
    armour: SlotPool,
    jewellery: SlotPool,
}

impl AffixCatalog {
    /// Build a catalog from raw data, excluding misconfigured templates
    pub fn from_data(data: CatalogData) -> Self {
        Self {
            weapon: sanitize_pool("weapon", data.weapon),
            armour: sanitize_pool("armour", data.armour),
            jewellery: sanitize_pool("jewellery", data.jewellery),
        }
    }

    /// Clone the catalog back into its authoring representation
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            weapon: self.weapon.clone(),
            armour: self.armour.clone(),
            jewellery: self.jewellery.clone(),
        }
    }

    fn pool(&self, family: FamilyKind) -> &SlotPool {
        match family {
            FamilyKind::Weapon => &self.weapon,
            FamilyKind::Armour => &self.armour,
            FamilyKind::Jewellery => &self.jewellery,
        }
    }

    /// All templates for one family and slot
    pub fn templates(&self, family: FamilyKind, slot: AffixSlot) -> &[AffixTemplate] {
        self.pool(family).templates(slot)
    }

    /// Templates passing an arbitrary filter, in catalog order
    pub fn filter<'a, F>(
        &'a self,
        family: FamilyKind,
        slot: AffixSlot,
        predicate: F,
    ) -> Vec<&'a AffixTemplate>
    where
        F: Fn(&AffixTemplate) -> bool,
    {
        self.templates(family, slot)
            .iter()
            .filter(|t| predicate(t))
            .collect()
    }

    /// Total template count across every partition
    pub fn len(&self) -> usize {
        self.weapon.len() + self.armour.len() + self.jewellery.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sanitize_pool(family: &str, pool: SlotPool) -> SlotPool {
    SlotPool {
        prefixes: sanitize_templates(family, pool.prefixes),
        suffixes: sanitize_templates(family, pool.suffixes),
    }
}

fn sanitize_templates(family: &str, templates: Vec<AffixTemplate>) -> Vec<AffixTemplate> {
    templates
        .into_iter()
        .filter(|template| match template.validate() {
            Ok(()) => true,
            Err(reason) => {
                log::warn!("excluding misconfigured {} affix: {}", family, reason);
                false
            }
        })
        .collect()
}
