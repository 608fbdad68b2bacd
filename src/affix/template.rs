//! Affix templates
//!
//! A named Prefix/Suffix carrying one or more modifier templates, a power
//! tier, a minimum item level, and the tags an item must have for the affix
//! to apply.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::modifier::ModifierTemplate;
use crate::item::Tag;

/// Affix power band, T1 (strongest) to T9 (weakest)
///
/// Stronger tiers unlock at higher item levels; see `gen::tier_gate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    T8,
    T9,
}

impl Tier {
    /// Numeric band, 1 (strongest) to 9 (weakest)
    pub fn numeric(&self) -> u8 {
        match self {
            Tier::T1 => 1,
            Tier::T2 => 2,
            Tier::T3 => 3,
            Tier::T4 => 4,
            Tier::T5 => 5,
            Tier::T6 => 6,
            Tier::T7 => 7,
            Tier::T8 => 8,
            Tier::T9 => 9,
        }
    }
}

/// The two independent affix slots an item can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixSlot {
    Prefix,
    Suffix,
}

/// Top-level catalog grouping, for browsing and authoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixCategory {
    Offence,
    Defence,
    Resistance,
    Utility,
}

fn default_weight() -> u32 {
    1
}

/// A named affix template, immutable after catalog load
///
/// Templates sharing a `sub_category` are mutually exclusive on one item:
/// two differently-worded tiers of the same underlying stat never stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixTemplate {
    pub name: String,
    pub slot: AffixSlot,
    pub tier: Tier,
    /// Minimum item level, independent of the tier gate
    #[serde(default)]
    pub min_level: u32,
    /// One or more numeric effects rolled together
    pub modifiers: Vec<ModifierTemplate>,
    /// Tags the item must carry; requirements, not exclusions
    pub compatible_tags: BTreeSet<Tag>,
    pub category: AffixCategory,
    /// Mutual-exclusion group within `category`
    pub sub_category: String,
    /// Spawn weight for the weighted pool pick
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl AffixTemplate {
    pub fn new(
        name: impl Into<String>,
        slot: AffixSlot,
        tier: Tier,
        min_level: u32,
        modifiers: Vec<ModifierTemplate>,
        compatible_tags: impl IntoIterator<Item = Tag>,
        category: AffixCategory,
        sub_category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            tier,
            min_level,
            modifiers,
            compatible_tags: compatible_tags.into_iter().collect(),
            category,
            sub_category: sub_category.into(),
            weight: 1,
        }
    }

    /// Override the default spawn weight
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Load-time self check; returns the reason when the template must be
    /// excluded from all pools
    pub fn validate(&self) -> Result<(), String> {
        if self.compatible_tags.is_empty() {
            return Err(format!("affix `{}` has no compatible tags", self.name));
        }
        if self.modifiers.is_empty() {
            return Err(format!("affix `{}` has no modifiers", self.name));
        }
        for modifier in &self.modifiers {
            modifier
                .validate()
                .map_err(|reason| format!("affix `{}`: {}", self.name, reason))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::modifier::Stat;

    fn life_affix(tags: Vec<Tag>) -> AffixTemplate {
        AffixTemplate::new(
            "Hale",
            AffixSlot::Prefix,
            Tier::T8,
            1,
            vec![ModifierTemplate::flat(Stat::Life, 10.0, 19.0).global()],
            tags,
            AffixCategory::Defence,
            "added_life",
        )
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::T1.numeric() < Tier::T9.numeric());
        assert_eq!(Tier::T5.numeric(), 5);
    }

    #[test]
    fn test_empty_tags_rejected() {
        assert!(life_affix(vec![]).validate().is_err());
        assert!(life_affix(vec![Tag::Armour]).validate().is_ok());
    }

    #[test]
    fn test_empty_modifiers_rejected() {
        let mut affix = life_affix(vec![Tag::Armour]);
        affix.modifiers.clear();
        assert!(affix.validate().is_err());
    }
}
