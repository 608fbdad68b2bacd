//! Tier gating
//!
//! Item level unlocks affix tiers in steps of ten levels. This staircase is
//! the single source of truth; every consumer (pool filtering, validators,
//! tests) derives from `max_tier_for` rather than restating thresholds.

use crate::affix::{AffixTemplate, Tier};

/// Strongest tier unlockable at an item level
pub fn max_tier_for(item_level: u32) -> Tier {
    match item_level {
        80.. => Tier::T1,
        70..=79 => Tier::T2,
        60..=69 => Tier::T3,
        50..=59 => Tier::T4,
        40..=49 => Tier::T5,
        30..=39 => Tier::T6,
        20..=29 => Tier::T7,
        10..=19 => Tier::T8,
        _ => Tier::T9,
    }
}

/// Whether a template may enter the candidate pool at this item level
///
/// Two independent gates: the template's tier must be no stronger than the
/// level allows, and the level must meet the template's own minimum.
/// Failing either is normal filtering, never an error.
pub fn is_eligible(template: &AffixTemplate, item_level: u32) -> bool {
    template.tier.numeric() >= max_tier_for(item_level).numeric()
        && item_level >= template.min_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::{AffixCategory, AffixSlot, ModifierTemplate, Stat};
    use crate::item::Tag;

    fn template(tier: Tier, min_level: u32) -> AffixTemplate {
        AffixTemplate::new(
            "Tempered",
            AffixSlot::Prefix,
            tier,
            min_level,
            vec![ModifierTemplate::increased(Stat::PhysicalDamage, 20.0, 39.0)],
            [Tag::Weapon],
            AffixCategory::Offence,
            "increased_physical_damage",
        )
    }

    #[test]
    fn test_staircase() {
        assert_eq!(max_tier_for(1), Tier::T9);
        assert_eq!(max_tier_for(9), Tier::T9);
        assert_eq!(max_tier_for(10), Tier::T8);
        assert_eq!(max_tier_for(35), Tier::T6);
        assert_eq!(max_tier_for(79), Tier::T2);
        assert_eq!(max_tier_for(80), Tier::T1);
        assert_eq!(max_tier_for(100), Tier::T1);
    }

    #[test]
    fn test_tier_gate_blocks_strong_tiers() {
        // T1 needs level 80; min_level alone does not open the gate
        assert!(!is_eligible(&template(Tier::T1, 1), 79));
        assert!(is_eligible(&template(Tier::T1, 1), 80));
        // Weak tiers stay available at high level
        assert!(is_eligible(&template(Tier::T9, 1), 80));
    }

    #[test]
    fn test_min_level_gate_is_independent() {
        // Tier allows it, min_level does not
        assert!(!is_eligible(&template(Tier::T8, 30), 15));
        assert!(is_eligible(&template(Tier::T8, 30), 30));
    }
}
