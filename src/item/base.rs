//! Base items
//!
//! The un-rolled item definitions the generator starts from: tags, family
//! stat block, level requirement, and any implicit modifiers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::affix::{ModifierTemplate, Stat};

/// Closed tag vocabulary driving affix compatibility
///
/// Tags describe item category, never magnitude; the dead-stat check in
/// `gen::compat` covers what tags cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Weapon,
    Armour,
    Jewellery,
    OneHanded,
    TwoHanded,
    Melee,
    Ranged,
    Attack,
    Caster,
    Sword,
    Axe,
    Mace,
    Bow,
    Wand,
    Shield,
    Helmet,
    BodyArmour,
    Gloves,
    Boots,
    Belt,
    Ring,
    Amulet,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Weapon => "weapon",
            Tag::Armour => "armour",
            Tag::Jewellery => "jewellery",
            Tag::OneHanded => "onehanded",
            Tag::TwoHanded => "twohanded",
            Tag::Melee => "melee",
            Tag::Ranged => "ranged",
            Tag::Attack => "attack",
            Tag::Caster => "caster",
            Tag::Sword => "sword",
            Tag::Axe => "axe",
            Tag::Mace => "mace",
            Tag::Bow => "bow",
            Tag::Wand => "wand",
            Tag::Shield => "shield",
            Tag::Helmet => "helmet",
            Tag::BodyArmour => "body_armour",
            Tag::Gloves => "gloves",
            Tag::Boots => "boots",
            Tag::Belt => "belt",
            Tag::Ring => "ring",
            Tag::Amulet => "amulet",
        }
    }
}

/// Item family discriminant, used to pick the catalog partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    Weapon,
    Armour,
    Jewellery,
}

/// Innate weapon stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub min_damage: f64,
    pub max_damage: f64,
    pub attack_speed: f64,
}

/// Innate armour defenses; hybrid pieces leave unused defenses at zero
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmourStats {
    pub armour: f64,
    pub evasion: f64,
    pub energy_shield: f64,
}

/// Per-family stat block as a tagged variant
///
/// Shared fields (tags, required level) live on `BaseItem`; matching on the
/// family keeps compatibility and aggregation exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFamily {
    Weapon(WeaponStats),
    Armour(ArmourStats),
    Jewellery,
}

impl ItemFamily {
    pub fn kind(&self) -> FamilyKind {
        match self {
            ItemFamily::Weapon(_) => FamilyKind::Weapon,
            ItemFamily::Armour(_) => FamilyKind::Armour,
            ItemFamily::Jewellery => FamilyKind::Jewellery,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponStats> {
        match self {
            ItemFamily::Weapon(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_armour(&self) -> Option<&ArmourStats> {
        match self {
            ItemFamily::Armour(stats) => Some(stats),
            _ => None,
        }
    }
}

/// An un-rolled base item definition
///
/// Tags and `required_level` come pre-populated from the base item source;
/// the generator trusts them beyond the dead-stat check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseItem {
    pub name: String,
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub required_level: u32,
    pub family: ItemFamily,
    /// Fixed modifiers always present on the item, rolled once at
    /// generation from their (usually collapsed) ranges
    #[serde(default)]
    pub implicits: Vec<ModifierTemplate>,
}

impl BaseItem {
    pub fn new(
        name: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        required_level: u32,
        family: ItemFamily,
    ) -> Self {
        Self {
            name: name.into(),
            tags: tags.into_iter().collect(),
            required_level,
            family,
            implicits: Vec::new(),
        }
    }

    pub fn with_implicits(mut self, implicits: Vec<ModifierTemplate>) -> Self {
        self.implicits = implicits;
        self
    }

    /// The item's innate value for a stat; zero for stats the family does
    /// not carry
    pub fn base_stat(&self, stat: Stat) -> f64 {
        match &self.family {
            ItemFamily::Weapon(weapon) => match stat {
                Stat::PhysicalDamage => (weapon.min_damage + weapon.max_damage) / 2.0,
                Stat::AttackSpeed => weapon.attack_speed,
                _ => 0.0,
            },
            ItemFamily::Armour(armour) => match stat {
                Stat::Armour => armour.armour,
                Stat::Evasion => armour.evasion,
                Stat::EnergyShield => armour.energy_shield,
                _ => 0.0,
            },
            ItemFamily::Jewellery => 0.0,
        }
    }

    pub fn is_shield(&self) -> bool {
        self.tags.contains(&Tag::Shield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stat_by_family() {
        let sword = BaseItem::new(
            "Rusted Blade",
            [Tag::Weapon, Tag::Sword, Tag::OneHanded, Tag::Melee, Tag::Attack],
            1,
            ItemFamily::Weapon(WeaponStats { min_damage: 4.0, max_damage: 10.0, attack_speed: 1.4 }),
        );
        assert_eq!(sword.base_stat(Stat::PhysicalDamage), 7.0);
        assert_eq!(sword.base_stat(Stat::AttackSpeed), 1.4);
        assert_eq!(sword.base_stat(Stat::Armour), 0.0);

        let shroud = BaseItem::new(
            "Wraith Shroud",
            [Tag::Armour, Tag::BodyArmour],
            20,
            ItemFamily::Armour(ArmourStats { energy_shield: 60.0, ..Default::default() }),
        );
        assert_eq!(shroud.base_stat(Stat::EnergyShield), 60.0);
        assert_eq!(shroud.base_stat(Stat::Armour), 0.0);
        assert!(!shroud.is_shield());
    }

    #[test]
    fn test_jewellery_has_no_base_stats() {
        let ring = BaseItem::new("Iron Ring", [Tag::Jewellery, Tag::Ring], 1, ItemFamily::Jewellery);
        assert_eq!(ring.base_stat(Stat::Life), 0.0);
        assert_eq!(ring.family.kind(), FamilyKind::Jewellery);
    }
}
