//! Item generation
//!
//! The orchestration layer: rarity allocation, candidate pools, numeric
//! rolls, and the assembled `GeneratedItem`. Generation is pure synchronous
//! computation over the shared read-only catalog; every call owns its RNG
//! state, so concurrent calls never race.

pub mod compat;
pub mod rarity;
pub mod roller;
pub mod tier_gate;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::affix::AffixCatalog;
use crate::error::GenerateError;
use crate::item::{BaseItem, GeneratedItem};

pub use compat::is_compatible;
pub use rarity::{allocate_counts, roll_rarity, Rarity, RarityPolicy, RarityWeights};
pub use roller::{reroll_affix, roll_affixes, roll_dual_range, roll_value};
pub use tier_gate::{is_eligible, max_tier_for};

/// Generate one item, optionally from an explicit seed
///
/// With a seed the entire roll (rarity draw, template picks, numeric
/// values) is byte-for-byte reproducible; without one the RNG is seeded
/// from process entropy. Both paths share one stream type so behavior
/// differs only in the seed.
pub fn generate_item(
    catalog: &AffixCatalog,
    base: &BaseItem,
    item_level: u32,
    policy: &RarityPolicy,
    seed: Option<u64>,
) -> Result<GeneratedItem, GenerateError> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    generate_item_with_rng(catalog, base, item_level, policy, &mut rng)
}

/// Generate one item with a caller-supplied RNG
pub fn generate_item_with_rng(
    catalog: &AffixCatalog,
    base: &BaseItem,
    item_level: u32,
    policy: &RarityPolicy,
    rng: &mut impl Rng,
) -> Result<GeneratedItem, GenerateError> {
    if item_level == 0 {
        return Err(GenerateError::InvalidItemLevel(item_level));
    }
    if base.tags.is_empty() {
        return Err(GenerateError::UntaggedBaseItem(base.name.clone()));
    }

    let (prefix_count, suffix_count) = allocate_counts(policy, rng);

    let implicits = base
        .implicits
        .iter()
        .map(|template| roller::roll_modifier(template, rng))
        .collect();

    let (prefixes, suffixes) =
        roll_affixes(base, item_level, prefix_count, suffix_count, catalog, rng);

    Ok(GeneratedItem {
        base: base.clone(),
        implicits,
        prefixes,
        suffixes,
    })
}

/// Generate a batch of drops, picking a random base per item
pub fn generate_drops(
    catalog: &AffixCatalog,
    bases: &[BaseItem],
    item_level: u32,
    count: usize,
    policy: &RarityPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<GeneratedItem>, GenerateError> {
    if bases.is_empty() {
        return Err(GenerateError::EmptyBasePool);
    }
    let mut drops = Vec::with_capacity(count);
    for _ in 0..count {
        let base = bases.choose(rng).ok_or(GenerateError::EmptyBasePool)?;
        drops.push(generate_item_with_rng(catalog, base, item_level, policy, rng)?);
    }
    Ok(drops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_base_items, default_catalog};
    use crate::item::{ItemFamily, Tag, WeaponStats};
    use std::collections::BTreeSet;

    fn sword() -> BaseItem {
        BaseItem::new(
            "Rusted Blade",
            [Tag::Weapon, Tag::Sword, Tag::OneHanded, Tag::Melee, Tag::Attack],
            1,
            ItemFamily::Weapon(WeaponStats { min_damage: 4.0, max_damage: 10.0, attack_speed: 1.4 }),
        )
    }

    #[test]
    fn test_invalid_requests_are_refused() {
        let catalog = default_catalog();
        let policy = RarityPolicy::Forced(Rarity::Magic);

        let err = generate_item(&catalog, &sword(), 0, &policy, Some(1)).unwrap_err();
        assert_eq!(err, GenerateError::InvalidItemLevel(0));

        let mut untagged = sword();
        untagged.tags.clear();
        let err = generate_item(&catalog, &untagged, 50, &policy, Some(1)).unwrap_err();
        assert_eq!(err, GenerateError::UntaggedBaseItem("Rusted Blade".to_string()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let catalog = default_catalog();
        let policy = RarityPolicy::Weighted(RarityWeights::default());

        let first = generate_item(&catalog, &sword(), 50, &policy, Some(12345)).unwrap();
        let second = generate_item(&catalog, &sword(), 50, &policy, Some(12345)).unwrap();

        // Byte-identical output, not just equal fields
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let third = generate_item(&catalog, &sword(), 50, &policy, Some(54321)).unwrap();
        // Different seed, overwhelmingly likely different item
        assert!(first != third || first.affix_count() == 0);
    }

    #[test]
    fn test_forced_rare_end_to_end_at_level_80() {
        let catalog = default_catalog();
        let policy = RarityPolicy::Forced(Rarity::Rare);
        let max_numeric = max_tier_for(80).numeric();

        for seed in 0..50 {
            let item = generate_item(&catalog, &sword(), 80, &policy, Some(seed)).unwrap();

            let total = item.affix_count();
            assert!((1..=6).contains(&total), "seed {} rolled {} affixes", seed, total);
            assert!(item.prefixes.len() <= 3);
            assert!(item.suffixes.len() <= 3);

            let mut sub_categories = BTreeSet::new();
            for affix in item.prefixes.iter().chain(item.suffixes.iter()) {
                assert!(
                    affix.tier.numeric() >= max_numeric,
                    "seed {} rolled overpowered tier {:?}",
                    seed,
                    affix.tier
                );
                assert!(
                    sub_categories.insert(affix.sub_category.clone()),
                    "seed {} rolled duplicate sub-category {}",
                    seed,
                    affix.sub_category
                );
            }
        }
    }

    #[test]
    fn test_forced_normal_keeps_implicits_only() {
        let catalog = default_catalog();
        let bases = default_base_items();
        let ring = bases.iter().find(|b| b.name == "Iron Ring").unwrap();

        let item = generate_item(&catalog, ring, 40, &RarityPolicy::Forced(Rarity::Normal), Some(5)).unwrap();
        assert_eq!(item.affix_count(), 0);
        assert_eq!(item.calculated_rarity(), Rarity::Normal);
        assert!(!item.implicits.is_empty());
    }

    #[test]
    fn test_dead_stat_exclusion_sweep() {
        // An energy-shield affix never lands on a base with zero ES,
        // across an exhaustive sweep of seeds
        let catalog = default_catalog();
        let bases = default_base_items();
        let plate = bases.iter().find(|b| b.name == "Iron Plate").unwrap();
        assert_eq!(plate.base_stat(crate::affix::Stat::EnergyShield), 0.0);

        for seed in 0..100 {
            let item =
                generate_item(&catalog, plate, 80, &RarityPolicy::Forced(Rarity::Rare), Some(seed)).unwrap();
            for modifier in item.modifiers() {
                if modifier.scope == crate::affix::ModifierScope::Local {
                    assert_ne!(
                        modifier.stat,
                        crate::affix::Stat::EnergyShield,
                        "seed {} rolled a dead energy shield modifier",
                        seed
                    );
                    assert_ne!(modifier.stat, crate::affix::Stat::Evasion);
                }
            }
        }
    }

    #[test]
    fn test_low_level_degrades_gracefully() {
        // At level 1 only T9 templates with min_level 1 are in the pool;
        // a forced Rare may come out with fewer affixes
        let catalog = default_catalog();
        let item =
            generate_item(&catalog, &sword(), 1, &RarityPolicy::Forced(Rarity::Rare), Some(77)).unwrap();
        assert!(item.affix_count() <= 6);
        for affix in item.prefixes.iter().chain(item.suffixes.iter()) {
            assert!(affix.tier.numeric() >= 9);
        }
    }

    #[test]
    fn test_generate_drops_batch() {
        let catalog = default_catalog();
        let bases = default_base_items();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let drops = generate_drops(
            &catalog,
            &bases,
            60,
            20,
            &RarityPolicy::Weighted(RarityWeights::default()),
            &mut rng,
        )
        .unwrap();
        assert_eq!(drops.len(), 20);

        let err = generate_drops(&catalog, &[], 60, 5, &RarityPolicy::default(), &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::EmptyBasePool);
    }
}
