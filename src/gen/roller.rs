//! Numeric and affix rolling
//!
//! The range roller resolves template ranges to concrete integers; the
//! affix roller builds the per-slot candidate pool, draws weighted picks,
//! and enforces sub-category mutual exclusion.

use std::collections::BTreeSet;

use rand::Rng;

use crate::affix::{AffixCatalog, AffixSlot, AffixTemplate, ModifierTemplate, ValueRange};
use crate::gen::compat::is_compatible;
use crate::gen::tier_gate::is_eligible;
use crate::item::{BaseItem, RolledAffix, RolledModifier};

/// Uniformly sample an integer (rounded, not truncated) within the range
///
/// A collapsed range returns its value without consuming entropy, so a
/// seeded sequence stays stable across mixed range/fixed templates.
pub fn roll_value(range: ValueRange, rng: &mut impl Rng) -> i32 {
    let low = range.min.round() as i32;
    let high = range.max.round() as i32;
    if low >= high {
        low
    } else {
        rng.gen_range(low..=high)
    }
}

/// Roll both bounds of a dual-range modifier independently
///
/// No reordering or clamping: the rolled low may exceed the rolled high if
/// the design data says so; the data is trusted.
pub fn roll_dual_range(primary: ValueRange, secondary: ValueRange, rng: &mut impl Rng) -> (i32, i32) {
    (roll_value(primary, rng), roll_value(secondary, rng))
}

/// Resolve one modifier template, retaining the original bounds
pub fn roll_modifier(template: &ModifierTemplate, rng: &mut impl Rng) -> RolledModifier {
    let value = roll_value(template.value_range, rng);
    let secondary_value = template.secondary_range.map(|range| roll_value(range, rng));
    RolledModifier {
        stat: template.stat,
        kind: template.kind,
        scope: template.scope,
        damage_type: template.damage_type,
        value,
        secondary_value,
        value_bounds: template.value_range,
        secondary_bounds: template.secondary_range,
    }
}

/// Resolve an affix template into a rolled instance
pub fn roll_affix(template: &AffixTemplate, rng: &mut impl Rng) -> RolledAffix {
    RolledAffix {
        name: template.name.clone(),
        slot: template.slot,
        tier: template.tier,
        sub_category: template.sub_category.clone(),
        modifiers: template
            .modifiers
            .iter()
            .map(|modifier| roll_modifier(modifier, rng))
            .collect(),
    }
}

/// Redraw only the numeric values, within the retained original bounds
///
/// The template choice is kept; the old instance is discarded, never
/// mutated in place.
pub fn reroll_affix(rolled: &RolledAffix, rng: &mut impl Rng) -> RolledAffix {
    RolledAffix {
        name: rolled.name.clone(),
        slot: rolled.slot,
        tier: rolled.tier,
        sub_category: rolled.sub_category.clone(),
        modifiers: rolled
            .modifiers
            .iter()
            .map(|modifier| {
                let value = roll_value(modifier.value_bounds, rng);
                let secondary_value = modifier.secondary_bounds.map(|range| roll_value(range, rng));
                RolledModifier {
                    value,
                    secondary_value,
                    ..modifier.clone()
                }
            })
            .collect(),
    }
}

/// Roll up to the requested number of prefixes and suffixes
///
/// Each side draws from its own candidate pool (catalog partition filtered
/// by tier gate and compatibility). A sub-category used by any rolled affix
/// is excluded for the rest of the item. An exhausted pool stops the side
/// early; that is graceful degradation, not an error.
pub fn roll_affixes(
    base: &BaseItem,
    item_level: u32,
    prefix_count: usize,
    suffix_count: usize,
    catalog: &AffixCatalog,
    rng: &mut impl Rng,
) -> (Vec<RolledAffix>, Vec<RolledAffix>) {
    let mut used_sub_categories = BTreeSet::new();
    let prefixes = roll_side(
        base,
        item_level,
        prefix_count,
        AffixSlot::Prefix,
        catalog,
        &mut used_sub_categories,
        rng,
    );
    let suffixes = roll_side(
        base,
        item_level,
        suffix_count,
        AffixSlot::Suffix,
        catalog,
        &mut used_sub_categories,
        rng,
    );
    (prefixes, suffixes)
}

fn roll_side(
    base: &BaseItem,
    item_level: u32,
    count: usize,
    slot: AffixSlot,
    catalog: &AffixCatalog,
    used_sub_categories: &mut BTreeSet<String>,
    rng: &mut impl Rng,
) -> Vec<RolledAffix> {
    let mut candidates: Vec<&AffixTemplate> = catalog
        .templates(base.family.kind(), slot)
        .iter()
        .filter(|template| is_eligible(template, item_level))
        .filter(|template| is_compatible(base, template))
        .filter(|template| !used_sub_categories.contains(&template.sub_category))
        .collect();

    log::debug!(
        "{:?} pool for `{}` at level {}: {} candidates for {} slots",
        slot,
        base.name,
        item_level,
        candidates.len(),
        count
    );

    let mut rolled = Vec::with_capacity(count);
    while rolled.len() < count && !candidates.is_empty() {
        let Some(index) = weighted_pick(&candidates, rng) else {
            break;
        };
        let chosen = candidates[index];
        used_sub_categories.insert(chosen.sub_category.clone());
        rolled.push(roll_affix(chosen, rng));

        // Drop the pick and everything sharing its sub-category: two
        // differently-worded tiers of one stat never stack
        let sub_category = chosen.sub_category.clone();
        candidates.retain(|template| template.sub_category != sub_category);
    }
    rolled
}

fn weighted_pick(candidates: &[&AffixTemplate], rng: &mut impl Rng) -> Option<usize> {
    let total: u32 = candidates.iter().map(|template| template.weight).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for (index, template) in candidates.iter().enumerate() {
        if roll < template.weight {
            return Some(index);
        }
        roll -= template.weight;
    }
    None
}
