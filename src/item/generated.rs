//! Generated items
//!
//! The generator's output: a base item plus rolled implicit, prefix, and
//! suffix modifiers, with derived aggregate stat queries. Rarity is always
//! derived from the affix count, never stored, so it can never drift.

use serde::{Deserialize, Serialize};

use crate::affix::{
    AffixSlot, DamageType, ModifierKind, ModifierScope, Stat, Tier, ValueRange,
};
use crate::gen::rarity::Rarity;
use crate::item::base::BaseItem;

/// A modifier resolved to concrete values
///
/// The original template bounds ride along so a later reroll, or a UI range
/// slider, can reconstruct the legal range without consulting the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolledModifier {
    pub stat: Stat,
    pub kind: ModifierKind,
    pub scope: ModifierScope,
    #[serde(default)]
    pub damage_type: Option<DamageType>,
    /// Rolled value (the low bound, for dual-range modifiers)
    pub value: i32,
    /// Rolled high bound for dual-range modifiers
    #[serde(default)]
    pub secondary_value: Option<i32>,
    /// Template bounds the value was rolled from
    pub value_bounds: ValueRange,
    #[serde(default)]
    pub secondary_bounds: Option<ValueRange>,
}

impl RolledModifier {
    /// The modifier's contribution to a scalar stat total; dual-range
    /// modifiers contribute the average of their two rolled bounds
    pub fn scalar_value(&self) -> f64 {
        match self.secondary_value {
            Some(secondary) => (self.value as f64 + secondary as f64) / 2.0,
            None => self.value as f64,
        }
    }

    /// Human-readable modifier line
    pub fn display(&self) -> String {
        if let (Some(secondary), Some(damage_type)) = (self.secondary_value, self.damage_type) {
            let type_name = match damage_type {
                DamageType::Physical => "Physical",
                DamageType::Fire => "Fire",
                DamageType::Cold => "Cold",
                DamageType::Lightning => "Lightning",
                DamageType::Chaos => "Chaos",
            };
            return format!("Adds {} to {} {} Damage", self.value, secondary, type_name);
        }

        match self.kind {
            ModifierKind::Flat if self.stat.is_percent() => {
                format!("+{}% to {}", self.value, self.stat.name())
            }
            ModifierKind::Flat => format!("+{} to {}", self.value, self.stat.name()),
            ModifierKind::Increased => format!("{}% increased {}", self.value, self.stat.name()),
            ModifierKind::Reduced => format!("{}% reduced {}", self.value, self.stat.name()),
            ModifierKind::More => format!("{}% more {}", self.value, self.stat.name()),
        }
    }
}

/// An affix template resolved to concrete numeric values
///
/// Created once at generation time and immutable afterwards; only an
/// explicit reroll discards and redraws the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolledAffix {
    pub name: String,
    pub slot: AffixSlot,
    pub tier: Tier,
    pub sub_category: String,
    pub modifiers: Vec<RolledModifier>,
}

impl RolledAffix {
    /// All modifier lines on one row, for compact listings
    pub fn display(&self) -> String {
        self.modifiers
            .iter()
            .map(|m| m.display())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Global-scope modifier totals for one stat
///
/// Exposed separately from `total_stat` for the consuming character-stat
/// system to apply later.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifierTotals {
    /// Sum of Flat values (dual ranges contribute their average)
    pub flat: f64,
    /// Net additive percentage: sum of Increased minus sum of Reduced
    pub increased: f64,
    /// Combined More multiplier
    pub more: f64,
}

impl ModifierTotals {
    fn empty() -> Self {
        Self { flat: 0.0, increased: 0.0, more: 1.0 }
    }
}

/// A fully generated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub base: BaseItem,
    /// Fixed modifiers from the base item, always present
    pub implicits: Vec<RolledModifier>,
    /// Rolled prefixes, 0..=3
    pub prefixes: Vec<RolledAffix>,
    /// Rolled suffixes, 0..=3
    pub suffixes: Vec<RolledAffix>,
}

impl GeneratedItem {
    pub fn affix_count(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }

    /// Rarity derived from the affix count: 0 Normal, 1-2 Magic, 3+ Rare
    pub fn calculated_rarity(&self) -> Rarity {
        match self.affix_count() {
            0 => Rarity::Normal,
            1 | 2 => Rarity::Magic,
            _ => Rarity::Rare,
        }
    }

    /// Every modifier on the item: implicits, then prefixes, then suffixes
    pub fn modifiers(&self) -> impl Iterator<Item = &RolledModifier> {
        self.implicits
            .iter()
            .chain(self.prefixes.iter().flat_map(|a| a.modifiers.iter()))
            .chain(self.suffixes.iter().flat_map(|a| a.modifiers.iter()))
    }

    fn local_modifiers(&self, stat: Stat) -> impl Iterator<Item = &RolledModifier> {
        self.modifiers()
            .filter(move |m| m.stat == stat && m.scope == ModifierScope::Local)
    }

    /// Effective item total for a stat, Local modifiers only
    ///
    /// Composition: base plus summed flats, one additive multiplier from
    /// the Increased/Reduced sum, then the multiplicative More chain.
    /// Results round up; a consistent ceiling avoids under-counting across
    /// every derived total.
    pub fn total_stat(&self, stat: Stat) -> i32 {
        let mut flat = self.base.base_stat(stat);
        let mut increased = 0.0;
        let mut more = 1.0;

        for modifier in self.local_modifiers(stat) {
            match modifier.kind {
                ModifierKind::Flat => flat += modifier.scalar_value(),
                ModifierKind::Increased => increased += modifier.value as f64,
                ModifierKind::Reduced => increased -= modifier.value as f64,
                ModifierKind::More => more *= 1.0 + modifier.value as f64 / 100.0,
            }
        }

        (flat * (1.0 + increased / 100.0) * more).ceil() as i32
    }

    /// The folded (min, max) damage range for one damage type
    pub fn total_damage_range(&self, damage_type: DamageType) -> (i32, i32) {
        let stat = Stat::for_damage_type(damage_type);

        let (mut min, mut max) = match (self.base.family.as_weapon(), damage_type) {
            (Some(weapon), DamageType::Physical) => (weapon.min_damage, weapon.max_damage),
            _ => (0.0, 0.0),
        };

        let mut increased = 0.0;
        let mut more = 1.0;
        let mut any_flat = min > 0.0 || max > 0.0;

        for modifier in self.local_modifiers(stat) {
            match modifier.kind {
                ModifierKind::Flat => {
                    min += modifier.value as f64;
                    max += modifier.secondary_value.unwrap_or(modifier.value) as f64;
                    any_flat = true;
                }
                ModifierKind::Increased => increased += modifier.value as f64,
                ModifierKind::Reduced => increased -= modifier.value as f64,
                ModifierKind::More => more *= 1.0 + modifier.value as f64 / 100.0,
            }
        }

        if !any_flat {
            return (0, 0);
        }

        let multiplier = (1.0 + increased / 100.0) * more;
        ((min * multiplier).ceil() as i32, (max * multiplier).ceil() as i32)
    }

    /// Global-scope totals for a stat, excluded from `total_stat`
    pub fn total_global_modifier(&self, stat: Stat) -> ModifierTotals {
        let mut totals = ModifierTotals::empty();
        for modifier in self
            .modifiers()
            .filter(|m| m.stat == stat && m.scope == ModifierScope::Global)
        {
            match modifier.kind {
                ModifierKind::Flat => totals.flat += modifier.scalar_value(),
                ModifierKind::Increased => totals.increased += modifier.value as f64,
                ModifierKind::Reduced => totals.increased -= modifier.value as f64,
                ModifierKind::More => totals.more *= 1.0 + modifier.value as f64 / 100.0,
            }
        }
        totals
    }

    /// Display name composed from the first prefix and suffix
    pub fn display_name(&self) -> String {
        let prefix = self.prefixes.first().map(|a| a.name.as_str());
        let suffix = self.suffixes.first().map(|a| a.name.as_str());

        match (prefix, suffix) {
            (None, None) => self.base.name.clone(),
            (Some(p), None) => format!("{} {}", p, self.base.name),
            (None, Some(s)) => format!("{} {}", self.base.name, s),
            (Some(p), Some(s)) => format!("{} {} {}", p, self.base.name, s),
        }
    }

    /// Multi-line description for logs and demo output
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} [{}]\n",
            self.display_name(),
            self.calculated_rarity().name()
        ));

        if self.base.family.as_weapon().is_some() {
            let (min, max) = self.total_damage_range(DamageType::Physical);
            if max > 0 {
                out.push_str(&format!("  Physical Damage: {}-{}\n", min, max));
            }
            for damage_type in [DamageType::Fire, DamageType::Cold, DamageType::Lightning, DamageType::Chaos] {
                let (min, max) = self.total_damage_range(damage_type);
                if max > 0 {
                    out.push_str(&format!("  {:?} Damage: {}-{}\n", damage_type, min, max));
                }
            }
        }
        if self.base.family.as_armour().is_some() {
            for stat in [Stat::Armour, Stat::Evasion, Stat::EnergyShield] {
                let total = self.total_stat(stat);
                if total > 0 {
                    out.push_str(&format!("  {}: {}\n", stat.name(), total));
                }
            }
        }

        for implicit in &self.implicits {
            out.push_str(&format!("  {} (implicit)\n", implicit.display()));
        }
        for affix in self.prefixes.iter().chain(self.suffixes.iter()) {
            for modifier in &affix.modifiers {
                out.push_str(&format!(
                    "  {} ({} T{})\n",
                    modifier.display(),
                    affix.name,
                    affix.tier.numeric()
                ));
            }
        }
        out
    }
}
