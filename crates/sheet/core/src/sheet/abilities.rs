//! Ability scores.
//!
//! Only `score` is authored input. `modifier` is derived from it but may be
//! supplied explicitly; see [`crate::DerivationPolicy`] for how a supplied
//! value is treated.

use super::dependent::Dependent;
use super::keyed::{KeyedStats, ModifierSlot};

/// The six abilities of a character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SingleAttribute {
    /// Raw ability score (e.g. 16).
    pub score: i32,

    /// Derived ability modifier.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub modifier: Dependent<i32>,
}

impl SingleAttribute {
    pub fn new(score: i32) -> Self {
        Self {
            score,
            modifier: Dependent::Unset,
        }
    }
}

impl ModifierSlot for SingleAttribute {
    fn modifier(&self) -> Dependent<i32> {
        self.modifier
    }

    fn modifier_mut(&mut self) -> &mut Dependent<i32> {
        &mut self.modifier
    }
}

/// The six ability entries, one explicit field each.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AttributeStats {
    pub strength: SingleAttribute,
    pub dexterity: SingleAttribute,
    pub constitution: SingleAttribute,
    pub intelligence: SingleAttribute,
    pub wisdom: SingleAttribute,
    pub charisma: SingleAttribute,
}

impl AttributeStats {
    /// Build from raw scores in STR, DEX, CON, INT, WIS, CHA order.
    pub fn from_scores(scores: [i32; 6]) -> Self {
        let [str, dex, con, int, wis, cha] = scores;
        Self {
            strength: SingleAttribute::new(str),
            dexterity: SingleAttribute::new(dex),
            constitution: SingleAttribute::new(con),
            intelligence: SingleAttribute::new(int),
            wisdom: SingleAttribute::new(wis),
            charisma: SingleAttribute::new(cha),
        }
    }

    pub fn score(&self, ability: Ability) -> i32 {
        self.entry(ability).score
    }

    pub fn set_score(&mut self, ability: Ability, score: i32) {
        self.entry_mut(ability).score = score;
    }
}

impl KeyedStats for AttributeStats {
    type Key = Ability;
    type Entry = SingleAttribute;

    const SECTION: &'static str = "attributes";
    const KEYS: &'static [Ability] = &Ability::ALL;

    fn entry(&self, ability: Ability) -> &SingleAttribute {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    fn entry_mut(&mut self, ability: Ability) -> &mut SingleAttribute {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }
}
