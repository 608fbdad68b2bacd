//! Affix/item compatibility
//!
//! Two layers: tag-subset matching, then a semantic dead-stat check for
//! what tags cannot express. Tags describe item category; only the base
//! stat block knows that a hybrid armour piece has zero of a defense type.

use crate::affix::{AffixTemplate, ModifierScope, ModifierTemplate, Stat};
use crate::item::BaseItem;

/// Whether an affix template may be attached to an item
pub fn is_compatible(base: &BaseItem, template: &AffixTemplate) -> bool {
    // Every template tag is a requirement. An empty set is a data error
    // (normally filtered at catalog load) and matches nothing.
    if template.compatible_tags.is_empty() {
        return false;
    }
    if !template.compatible_tags.is_subset(&base.tags) {
        return false;
    }

    template
        .modifiers
        .iter()
        .all(|modifier| !is_dead_modifier(base, modifier))
}

/// A Local modifier referencing a base stat the item has at zero would
/// have no mechanical effect; Global modifiers carry no such restriction.
fn is_dead_modifier(base: &BaseItem, modifier: &ModifierTemplate) -> bool {
    if modifier.scope != ModifierScope::Local {
        return false;
    }
    match modifier.stat {
        Stat::Armour => base.base_stat(Stat::Armour) <= 0.0,
        Stat::Evasion => base.base_stat(Stat::Evasion) <= 0.0,
        Stat::EnergyShield => base.base_stat(Stat::EnergyShield) <= 0.0,
        Stat::BlockChance => !base.is_shield(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::{AffixCategory, AffixSlot, Tier};
    use crate::item::{ArmourStats, ItemFamily, Tag, WeaponStats};

    fn armour_affix(name: &str, modifier: ModifierTemplate) -> AffixTemplate {
        AffixTemplate::new(
            name,
            AffixSlot::Prefix,
            Tier::T8,
            1,
            vec![modifier],
            [Tag::Armour],
            AffixCategory::Defence,
            name.to_lowercase(),
        )
    }

    fn body(stats: ArmourStats) -> BaseItem {
        BaseItem::new("Test Body", [Tag::Armour, Tag::BodyArmour], 1, ItemFamily::Armour(stats))
    }

    #[test]
    fn test_tags_are_requirements() {
        let sword = BaseItem::new(
            "Rusted Blade",
            [Tag::Weapon, Tag::Sword, Tag::OneHanded, Tag::Melee, Tag::Attack],
            1,
            ItemFamily::Weapon(WeaponStats { min_damage: 4.0, max_damage: 10.0, attack_speed: 1.4 }),
        );

        let one_handed = AffixTemplate::new(
            "Tempered",
            AffixSlot::Prefix,
            Tier::T8,
            1,
            vec![ModifierTemplate::increased(Stat::PhysicalDamage, 20.0, 39.0)],
            [Tag::Weapon, Tag::OneHanded],
            AffixCategory::Offence,
            "increased_physical_damage",
        );
        assert!(is_compatible(&sword, &one_handed));

        // Two-handed affixes are structurally impossible on this sword
        let two_handed = AffixTemplate::new(
            "Colossal",
            AffixSlot::Prefix,
            Tier::T8,
            1,
            vec![ModifierTemplate::increased(Stat::PhysicalDamage, 20.0, 39.0)],
            [Tag::Weapon, Tag::TwoHanded],
            AffixCategory::Offence,
            "increased_physical_damage",
        );
        assert!(!is_compatible(&sword, &two_handed));
    }

    #[test]
    fn test_empty_tag_set_matches_nothing() {
        let item = body(ArmourStats { armour: 100.0, ..Default::default() });
        let mut affix = armour_affix("Lacquered", ModifierTemplate::flat(Stat::Armour, 10.0, 20.0));
        affix.compatible_tags.clear();
        assert!(!is_compatible(&item, &affix));
    }

    #[test]
    fn test_dead_energy_shield_rejected() {
        let es_affix = armour_affix("Glimmering", ModifierTemplate::flat(Stat::EnergyShield, 6.0, 12.0));

        let pure_armour = body(ArmourStats { armour: 120.0, ..Default::default() });
        assert!(!is_compatible(&pure_armour, &es_affix));

        let shroud = body(ArmourStats { energy_shield: 60.0, ..Default::default() });
        assert!(is_compatible(&shroud, &es_affix));
    }

    #[test]
    fn test_dead_evasion_and_armour_rejected() {
        let evasion_affix = armour_affix("Agile", ModifierTemplate::flat(Stat::Evasion, 10.0, 20.0));
        let armour_affix_ = armour_affix("Lacquered", ModifierTemplate::flat(Stat::Armour, 10.0, 20.0));

        let shroud = body(ArmourStats { energy_shield: 60.0, ..Default::default() });
        assert!(!is_compatible(&shroud, &evasion_affix));
        assert!(!is_compatible(&shroud, &armour_affix_));
    }

    #[test]
    fn test_block_chance_needs_shield() {
        let block = armour_affix("of Warding", ModifierTemplate::increased(Stat::BlockChance, 10.0, 15.0));

        let helmet = BaseItem::new(
            "Iron Cap",
            [Tag::Armour, Tag::Helmet],
            1,
            ItemFamily::Armour(ArmourStats { armour: 40.0, ..Default::default() }),
        );
        assert!(!is_compatible(&helmet, &block));

        let shield = BaseItem::new(
            "Tower Shield",
            [Tag::Armour, Tag::Shield],
            1,
            ItemFamily::Armour(ArmourStats { armour: 80.0, ..Default::default() }),
        );
        assert!(is_compatible(&shield, &block));
    }

    #[test]
    fn test_global_modifiers_skip_dead_stat_check() {
        // Global energy shield on a pure-armour piece is conditional
        // character power, not a dead local stat
        let global_es = armour_affix(
            "Seething",
            ModifierTemplate::flat(Stat::EnergyShield, 20.0, 30.0).global(),
        );
        let pure_armour = body(ArmourStats { armour: 120.0, ..Default::default() });
        assert!(is_compatible(&pure_armour, &global_es));
    }
}
