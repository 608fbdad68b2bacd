//! Built-in catalog and base item definitions
//!
//! Hardcoded defaults so the engine works out of the box; the loader can
//! replace them from RON data files.

use crate::affix::{
    AffixCatalog, AffixCategory, AffixSlot, AffixTemplate, CatalogData, DamageType,
    ModifierTemplate, SlotPool, Stat, Tier,
};
use crate::item::{ArmourStats, BaseItem, ItemFamily, Tag, WeaponStats};

use AffixCategory::{Defence, Offence, Resistance, Utility};
use AffixSlot::{Prefix, Suffix};

fn affix(
    name: &str,
    slot: AffixSlot,
    tier: Tier,
    min_level: u32,
    modifier: ModifierTemplate,
    tags: &[Tag],
    category: AffixCategory,
    sub_category: &str,
    weight: u32,
) -> AffixTemplate {
    AffixTemplate::new(
        name,
        slot,
        tier,
        min_level,
        vec![modifier],
        tags.iter().copied(),
        category,
        sub_category,
    )
    .with_weight(weight)
}

/// Default catalog contents in authoring form
pub fn default_catalog_data() -> CatalogData {
    let weapon_tags = &[Tag::Weapon][..];

    let weapon = SlotPool {
        prefixes: vec![
            affix("Glinting", Prefix, Tier::T9, 1,
                ModifierTemplate::flat_dual(DamageType::Physical, (1.0, 1.0), (2.0, 3.0)),
                weapon_tags, Offence, "added_physical_damage", 1200),
            affix("Heavy", Prefix, Tier::T8, 1,
                ModifierTemplate::flat_dual(DamageType::Physical, (1.0, 2.0), (3.0, 4.0)),
                weapon_tags, Offence, "added_physical_damage", 1000),
            affix("Serrated", Prefix, Tier::T5, 30,
                ModifierTemplate::flat_dual(DamageType::Physical, (5.0, 8.0), (10.0, 14.0)),
                weapon_tags, Offence, "added_physical_damage", 400),
            affix("Merciless", Prefix, Tier::T1, 60,
                ModifierTemplate::flat_dual(DamageType::Physical, (13.0, 18.0), (26.0, 34.0)),
                weapon_tags, Offence, "added_physical_damage", 100),
            affix("Tempered", Prefix, Tier::T7, 8,
                ModifierTemplate::increased(Stat::PhysicalDamage, 20.0, 39.0),
                weapon_tags, Offence, "increased_physical_damage", 800),
            affix("Razor-honed", Prefix, Tier::T3, 52,
                ModifierTemplate::increased(Stat::PhysicalDamage, 65.0, 84.0),
                weapon_tags, Offence, "increased_physical_damage", 200),
            affix("Smouldering", Prefix, Tier::T8, 2,
                ModifierTemplate::flat_dual(DamageType::Fire, (1.0, 2.0), (3.0, 5.0)),
                weapon_tags, Offence, "added_fire_damage", 800),
            affix("Incinerating", Prefix, Tier::T2, 70,
                ModifierTemplate::flat_dual(DamageType::Fire, (19.0, 25.0), (38.0, 49.0)),
                weapon_tags, Offence, "added_fire_damage", 100),
            affix("Frosted", Prefix, Tier::T7, 14,
                ModifierTemplate::flat_dual(DamageType::Cold, (2.0, 3.0), (4.0, 6.0)),
                weapon_tags, Offence, "added_cold_damage", 600),
            affix("Humming", Prefix, Tier::T7, 16,
                ModifierTemplate::flat_dual(DamageType::Lightning, (1.0, 2.0), (6.0, 9.0)),
                weapon_tags, Offence, "added_lightning_damage", 600),
        ],
        suffixes: vec![
            affix("of Ease", Suffix, Tier::T9, 1,
                ModifierTemplate::increased(Stat::AttackSpeed, 4.0, 6.0),
                weapon_tags, Offence, "increased_attack_speed", 900),
            affix("of Skill", Suffix, Tier::T6, 11,
                ModifierTemplate::increased(Stat::AttackSpeed, 8.0, 12.0),
                weapon_tags, Offence, "increased_attack_speed", 700),
            affix("of Celerity", Suffix, Tier::T2, 64,
                ModifierTemplate::increased(Stat::AttackSpeed, 17.0, 22.0),
                weapon_tags, Offence, "increased_attack_speed", 150),
            affix("of Precision", Suffix, Tier::T5, 20,
                ModifierTemplate::increased(Stat::CriticalChance, 15.0, 24.0).global(),
                weapon_tags, Offence, "increased_critical_chance", 400),
            affix("of the Salamander", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::FireResistance, 6.0, 11.0).global(),
                weapon_tags, Resistance, "fire_resistance", 700),
            affix("of the Seal", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::ColdResistance, 6.0, 11.0).global(),
                weapon_tags, Resistance, "cold_resistance", 700),
            affix("of the Cloud", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::LightningResistance, 6.0, 11.0).global(),
                weapon_tags, Resistance, "lightning_resistance", 700),
        ],
    };

    let armour_tags = &[Tag::Armour][..];

    let armour = SlotPool {
        prefixes: vec![
            affix("Sturdy", Prefix, Tier::T9, 1,
                ModifierTemplate::flat(Stat::Armour, 4.0, 9.0),
                armour_tags, Defence, "added_armour", 1200),
            affix("Lacquered", Prefix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::Armour, 10.0, 20.0),
                armour_tags, Defence, "added_armour", 1000),
            affix("Girded", Prefix, Tier::T4, 46,
                ModifierTemplate::flat(Stat::Armour, 120.0, 180.0),
                armour_tags, Defence, "added_armour", 300),
            affix("Glimmering", Prefix, Tier::T8, 3,
                ModifierTemplate::flat(Stat::EnergyShield, 6.0, 12.0),
                armour_tags, Defence, "added_energy_shield", 1000),
            affix("Seething", Prefix, Tier::T3, 56,
                ModifierTemplate::flat(Stat::EnergyShield, 45.0, 60.0),
                armour_tags, Defence, "added_energy_shield", 200),
            affix("Agile", Prefix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::Evasion, 10.0, 20.0),
                armour_tags, Defence, "added_evasion", 1000),
            affix("Phantom", Prefix, Tier::T3, 54,
                ModifierTemplate::flat(Stat::Evasion, 140.0, 200.0),
                armour_tags, Defence, "added_evasion", 200),
            affix("Reinforced", Prefix, Tier::T6, 18,
                ModifierTemplate::increased(Stat::Armour, 15.0, 26.0),
                armour_tags, Defence, "increased_armour", 600),
            affix("Hale", Prefix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::Life, 10.0, 19.0).global(),
                armour_tags, Defence, "added_life", 1000),
            affix("Stalwart", Prefix, Tier::T4, 44,
                ModifierTemplate::flat(Stat::Life, 50.0, 69.0).global(),
                armour_tags, Defence, "added_life", 300),
        ],
        suffixes: vec![
            affix("of the Whelp", Suffix, Tier::T9, 1,
                ModifierTemplate::flat(Stat::FireResistance, 3.0, 5.0).global(),
                armour_tags, Resistance, "fire_resistance", 1200),
            affix("of the Drake", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::FireResistance, 6.0, 11.0).global(),
                armour_tags, Resistance, "fire_resistance", 1000),
            affix("of the Magma", Suffix, Tier::T3, 48,
                ModifierTemplate::flat(Stat::FireResistance, 31.0, 35.0).global(),
                armour_tags, Resistance, "fire_resistance", 200),
            affix("of the Seal", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::ColdResistance, 6.0, 11.0).global(),
                armour_tags, Resistance, "cold_resistance", 1000),
            affix("of the Cloud", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::LightningResistance, 6.0, 11.0).global(),
                armour_tags, Resistance, "lightning_resistance", 1000),
            affix("of Warding", Suffix, Tier::T5, 25,
                ModifierTemplate::increased(Stat::BlockChance, 10.0, 15.0),
                &[Tag::Armour, Tag::Shield], Defence, "increased_block_chance", 400),
            affix("of the Hare", Suffix, Tier::T6, 15,
                ModifierTemplate::increased(Stat::MovementSpeed, 10.0, 14.0).global(),
                &[Tag::Armour, Tag::Boots], Utility, "movement_speed", 400),
        ],
    };

    let jewellery_tags = &[Tag::Jewellery][..];

    let jewellery = SlotPool {
        prefixes: vec![
            affix("Healthy", Prefix, Tier::T9, 1,
                ModifierTemplate::flat(Stat::Life, 5.0, 9.0).global(),
                jewellery_tags, Defence, "added_life", 1200),
            affix("Hale", Prefix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::Life, 10.0, 19.0).global(),
                jewellery_tags, Defence, "added_life", 1000),
            affix("Cerulean", Prefix, Tier::T7, 5,
                ModifierTemplate::flat(Stat::Mana, 15.0, 24.0).global(),
                jewellery_tags, Defence, "added_mana", 800),
            affix("Flaming", Prefix, Tier::T6, 12,
                ModifierTemplate::flat_dual(DamageType::Fire, (4.0, 6.0), (9.0, 12.0)).global(),
                jewellery_tags, Offence, "added_fire_damage", 500),
            affix("Bladed", Prefix, Tier::T5, 28,
                ModifierTemplate::flat_dual(DamageType::Physical, (3.0, 5.0), (7.0, 10.0)).global(),
                jewellery_tags, Offence, "added_physical_damage", 400),
        ],
        suffixes: vec![
            affix("of the Ember", Suffix, Tier::T9, 1,
                ModifierTemplate::flat(Stat::FireResistance, 3.0, 5.0).global(),
                jewellery_tags, Resistance, "fire_resistance", 1200),
            affix("of the Drake", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::FireResistance, 6.0, 11.0).global(),
                jewellery_tags, Resistance, "fire_resistance", 1000),
            affix("of the Seal", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::ColdResistance, 6.0, 11.0).global(),
                jewellery_tags, Resistance, "cold_resistance", 1000),
            affix("of the Cloud", Suffix, Tier::T8, 1,
                ModifierTemplate::flat(Stat::LightningResistance, 6.0, 11.0).global(),
                jewellery_tags, Resistance, "lightning_resistance", 1000),
            affix("of Banishment", Suffix, Tier::T6, 24,
                ModifierTemplate::flat(Stat::ChaosResistance, 5.0, 10.0).global(),
                jewellery_tags, Resistance, "chaos_resistance", 300),
            affix("of Talent", Suffix, Tier::T6, 22,
                ModifierTemplate::increased(Stat::AttackSpeed, 5.0, 8.0).global(),
                jewellery_tags, Offence, "increased_attack_speed", 400),
        ],
    };

    CatalogData { weapon, armour, jewellery }
}

/// Validated default catalog
pub fn default_catalog() -> AffixCatalog {
    AffixCatalog::from_data(default_catalog_data())
}

/// Default base item definitions across all three families
pub fn default_base_items() -> Vec<BaseItem> {
    vec![
        BaseItem::new(
            "Rusted Blade",
            [Tag::Weapon, Tag::Sword, Tag::OneHanded, Tag::Melee, Tag::Attack],
            1,
            ItemFamily::Weapon(WeaponStats { min_damage: 4.0, max_damage: 9.0, attack_speed: 1.4 }),
        ),
        BaseItem::new(
            "Headsman Greataxe",
            [Tag::Weapon, Tag::Axe, Tag::TwoHanded, Tag::Melee, Tag::Attack],
            28,
            ItemFamily::Weapon(WeaponStats { min_damage: 26.0, max_damage: 44.0, attack_speed: 1.05 }),
        ),
        BaseItem::new(
            "Ashwood Bow",
            [Tag::Weapon, Tag::Bow, Tag::TwoHanded, Tag::Ranged, Tag::Attack],
            12,
            ItemFamily::Weapon(WeaponStats { min_damage: 9.0, max_damage: 21.0, attack_speed: 1.25 }),
        ),
        BaseItem::new(
            "Iron Plate",
            [Tag::Armour, Tag::BodyArmour],
            8,
            ItemFamily::Armour(ArmourStats { armour: 120.0, ..Default::default() }),
        ),
        BaseItem::new(
            "Wraith Shroud",
            [Tag::Armour, Tag::BodyArmour],
            20,
            ItemFamily::Armour(ArmourStats { energy_shield: 60.0, ..Default::default() }),
        ),
        BaseItem::new(
            "Scout's Jerkin",
            [Tag::Armour, Tag::BodyArmour],
            14,
            ItemFamily::Armour(ArmourStats { evasion: 95.0, ..Default::default() }),
        ),
        BaseItem::new(
            "Tower Shield",
            [Tag::Armour, Tag::Shield],
            24,
            ItemFamily::Armour(ArmourStats { armour: 80.0, ..Default::default() }),
        )
        .with_implicits(vec![ModifierTemplate::increased(Stat::BlockChance, 15.0, 15.0)]),
        BaseItem::new("Iron Ring", [Tag::Jewellery, Tag::Ring], 1, ItemFamily::Jewellery)
            .with_implicits(vec![
                ModifierTemplate::flat_dual(DamageType::Physical, (1.0, 1.0), (4.0, 4.0)).global(),
            ]),
        BaseItem::new("Onyx Amulet", [Tag::Jewellery, Tag::Amulet], 10, ItemFamily::Jewellery)
            .with_implicits(vec![ModifierTemplate::flat(Stat::Life, 20.0, 30.0).global()]),
    ]
}
