//! Modifier templates
//!
//! A modifier is a single numeric effect: "+X to Life", "Y% increased
//! Armour", "Adds A to B Fire Damage". Templates hold the roll ranges;
//! rolled instances live in `crate::item::generated`.

use serde::{Deserialize, Serialize};

/// How a modifier combines with a base stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Adds a raw amount to the base value
    Flat,
    /// Additive percentage, summed with other Increased/Reduced before applying
    Increased,
    /// Multiplicative percentage, applied after the Increased/Reduced sum
    More,
    /// Additive percentage, subtracted from the Increased sum
    Reduced,
}

/// Whether a modifier alters the item's own stats or the wearer's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModifierScope {
    /// Folded into the item's effective base before it leaves the generator
    #[default]
    Local,
    /// Exposed as a separate queryable total for the character-stat system
    Global,
}

/// Damage types for dual-range "Adds X to Y" modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    #[default]
    Physical,
    Fire,
    Cold,
    Lightning,
    Chaos,
}

/// Closed stat vocabulary
///
/// Stats are an enum rather than free strings so that typos die at compile
/// time (or at catalog load, for data files) instead of producing dead
/// modifiers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    PhysicalDamage,
    FireDamage,
    ColdDamage,
    LightningDamage,
    ChaosDamage,
    AttackSpeed,
    CriticalChance,
    Armour,
    Evasion,
    EnergyShield,
    BlockChance,
    Life,
    Mana,
    FireResistance,
    ColdResistance,
    LightningResistance,
    ChaosResistance,
    MovementSpeed,
}

impl Stat {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Stat::PhysicalDamage => "Physical Damage",
            Stat::FireDamage => "Fire Damage",
            Stat::ColdDamage => "Cold Damage",
            Stat::LightningDamage => "Lightning Damage",
            Stat::ChaosDamage => "Chaos Damage",
            Stat::AttackSpeed => "Attack Speed",
            Stat::CriticalChance => "Critical Strike Chance",
            Stat::Armour => "Armour",
            Stat::Evasion => "Evasion Rating",
            Stat::EnergyShield => "Energy Shield",
            Stat::BlockChance => "Block Chance",
            Stat::Life => "Life",
            Stat::Mana => "Mana",
            Stat::FireResistance => "Fire Resistance",
            Stat::ColdResistance => "Cold Resistance",
            Stat::LightningResistance => "Lightning Resistance",
            Stat::ChaosResistance => "Chaos Resistance",
            Stat::MovementSpeed => "Movement Speed",
        }
    }

    /// The damage stat for a damage type
    pub fn for_damage_type(damage_type: DamageType) -> Stat {
        match damage_type {
            DamageType::Physical => Stat::PhysicalDamage,
            DamageType::Fire => Stat::FireDamage,
            DamageType::Cold => Stat::ColdDamage,
            DamageType::Lightning => Stat::LightningDamage,
            DamageType::Chaos => Stat::ChaosDamage,
        }
    }

    /// Whether flat values of this stat display as percentage points
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            Stat::FireResistance
                | Stat::ColdResistance
                | Stat::LightningResistance
                | Stat::ChaosResistance
                | Stat::BlockChance
                | Stat::CriticalChance
        )
    }
}

/// An inclusive numeric roll range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always rolls the same value
    pub fn fixed(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// True when the range collapses to a single integer value
    pub fn is_fixed(&self) -> bool {
        self.min.round() as i64 == self.max.round() as i64
    }

    /// A single range must not be inverted; the relation BETWEEN the two
    /// ranges of a dual-range modifier is design data and never checked.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// A single numeric effect description, pure data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierTemplate {
    /// Stat this modifier touches
    pub stat: Stat,
    /// Roll range for the value (the low bound, for dual-range modifiers)
    pub value_range: ValueRange,
    /// Second independent roll range: "Adds (a-b) to (c-d) X Damage"
    #[serde(default)]
    pub secondary_range: Option<ValueRange>,
    pub kind: ModifierKind,
    #[serde(default)]
    pub scope: ModifierScope,
    /// Damage type tag for added-damage modifiers
    #[serde(default)]
    pub damage_type: Option<DamageType>,
}

impl ModifierTemplate {
    /// Flat single-range modifier, Local scope
    pub fn flat(stat: Stat, min: f64, max: f64) -> Self {
        Self {
            stat,
            value_range: ValueRange::new(min, max),
            secondary_range: None,
            kind: ModifierKind::Flat,
            scope: ModifierScope::Local,
            damage_type: None,
        }
    }

    /// Flat dual-range added-damage modifier, Local scope
    pub fn flat_dual(damage_type: DamageType, low: (f64, f64), high: (f64, f64)) -> Self {
        Self {
            stat: Stat::for_damage_type(damage_type),
            value_range: ValueRange::new(low.0, low.1),
            secondary_range: Some(ValueRange::new(high.0, high.1)),
            kind: ModifierKind::Flat,
            scope: ModifierScope::Local,
            damage_type: Some(damage_type),
        }
    }

    /// Increased-percentage modifier, Local scope
    pub fn increased(stat: Stat, min: f64, max: f64) -> Self {
        Self {
            stat,
            value_range: ValueRange::new(min, max),
            secondary_range: None,
            kind: ModifierKind::Increased,
            scope: ModifierScope::Local,
            damage_type: None,
        }
    }

    /// Reduced-percentage modifier, Local scope
    pub fn reduced(stat: Stat, min: f64, max: f64) -> Self {
        Self {
            stat,
            value_range: ValueRange::new(min, max),
            secondary_range: None,
            kind: ModifierKind::Reduced,
            scope: ModifierScope::Local,
            damage_type: None,
        }
    }

    /// More-percentage modifier, Local scope
    pub fn more(stat: Stat, min: f64, max: f64) -> Self {
        Self {
            stat,
            value_range: ValueRange::new(min, max),
            secondary_range: None,
            kind: ModifierKind::More,
            scope: ModifierScope::Local,
            damage_type: None,
        }
    }

    /// Switch the modifier to Global scope
    pub fn global(mut self) -> Self {
        self.scope = ModifierScope::Global;
        self
    }

    /// Check the template's own ranges; returns a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if !self.value_range.is_valid() {
            return Err(format!(
                "{}: inverted value range {}..{}",
                self.stat.name(),
                self.value_range.min,
                self.value_range.max
            ));
        }
        if let Some(secondary) = self.secondary_range {
            if !secondary.is_valid() {
                return Err(format!(
                    "{}: inverted secondary range {}..{}",
                    self.stat.name(),
                    secondary.min,
                    secondary.max
                ));
            }
        }
        Ok(())
    }
}
