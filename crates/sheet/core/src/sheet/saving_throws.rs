//! Saving throws.
//!
//! Only the proficiency flags and misc bonus are authored. The modifier is
//! currently a copy of the ability modifier; proficiency, expertise and misc
//! bonus are stored and round-tripped but not folded in.

use super::abilities::Ability;
use super::dependent::Dependent;
use super::keyed::{KeyedStats, ModifierSlot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SingleSavingThrow {
    #[cfg_attr(feature = "serde", serde(default))]
    pub proficient: bool,

    /// Rare for saves; kept for homebrew compatibility.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expertise: bool,

    /// Bonus from magic items, features or situational effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub misc_bonus: i32,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub modifier: Dependent<i32>,
}

impl ModifierSlot for SingleSavingThrow {
    fn modifier(&self) -> Dependent<i32> {
        self.modifier
    }

    fn modifier_mut(&mut self) -> &mut Dependent<i32> {
        &mut self.modifier
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SavingThrowStats {
    pub strength: SingleSavingThrow,
    pub dexterity: SingleSavingThrow,
    pub constitution: SingleSavingThrow,
    pub intelligence: SingleSavingThrow,
    pub wisdom: SingleSavingThrow,
    pub charisma: SingleSavingThrow,
}

impl KeyedStats for SavingThrowStats {
    type Key = Ability;
    type Entry = SingleSavingThrow;

    const SECTION: &'static str = "saving_throws";
    const KEYS: &'static [Ability] = &Ability::ALL;

    fn entry(&self, ability: Ability) -> &SingleSavingThrow {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    fn entry_mut(&mut self, ability: Ability) -> &mut SingleSavingThrow {
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
