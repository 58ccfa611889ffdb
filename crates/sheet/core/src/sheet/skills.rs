//! Skills and the fixed skill → ability table.

use super::abilities::Ability;
use super::dependent::Dependent;
use super::keyed::{KeyedStats, ModifierSlot};

/// The eighteen skills of a character.
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
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// The ability whose modifier a skill uses.
    ///
    /// This table is fixed; `related_attribute` on a skill entry does not
    /// change it.
    pub const fn governing_ability(&self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,

            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,

            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Ability::Intelligence,

            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Ability::Wisdom,

            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Ability::Charisma
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SingleSkill {
    #[cfg_attr(feature = "serde", serde(default))]
    pub proficient: bool,

    /// Doubled proficiency bonus (common for rogues and bards).
    #[cfg_attr(feature = "serde", serde(default))]
    pub expertise: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub misc_bonus: i32,

    /// Authored override of the governing ability. Stored, not applied.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub related_attribute: Option<Ability>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub modifier: Dependent<i32>,
}

impl ModifierSlot for SingleSkill {
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
pub struct SkillStats {
    pub acrobatics: SingleSkill,
    pub animal_handling: SingleSkill,
    pub arcana: SingleSkill,
    pub athletics: SingleSkill,
    pub deception: SingleSkill,
    pub history: SingleSkill,
    pub insight: SingleSkill,
    pub intimidation: SingleSkill,
    pub investigation: SingleSkill,
    pub medicine: SingleSkill,
    pub nature: SingleSkill,
    pub perception: SingleSkill,
    pub performance: SingleSkill,
    pub persuasion: SingleSkill,
    pub religion: SingleSkill,
    pub sleight_of_hand: SingleSkill,
    pub stealth: SingleSkill,
    pub survival: SingleSkill,
}

impl KeyedStats for SkillStats {
    type Key = Skill;
    type Entry = SingleSkill;

    const SECTION: &'static str = "skills";
    const KEYS: &'static [Skill] = &Skill::ALL;

    fn entry(&self, skill: Skill) -> &SingleSkill {
        match skill {
            Skill::Acrobatics => &self.acrobatics,
            Skill::AnimalHandling => &self.animal_handling,
            Skill::Arcana => &self.arcana,
            Skill::Athletics => &self.athletics,
            Skill::Deception => &self.deception,
            Skill::History => &self.history,
            Skill::Insight => &self.insight,
            Skill::Intimidation => &self.intimidation,
            Skill::Investigation => &self.investigation,
            Skill::Medicine => &self.medicine,
            Skill::Nature => &self.nature,
            Skill::Perception => &self.perception,
            Skill::Performance => &self.performance,
            Skill::Persuasion => &self.persuasion,
            Skill::Religion => &self.religion,
            Skill::SleightOfHand => &self.sleight_of_hand,
            Skill::Stealth => &self.stealth,
            Skill::Survival => &self.survival,
        }
    }

    fn entry_mut(&mut self, skill: Skill) -> &mut SingleSkill {
        match skill {
            Skill::Acrobatics => &mut self.acrobatics,
            Skill::AnimalHandling => &mut self.animal_handling,
            Skill::Arcana => &mut self.arcana,
            Skill::Athletics => &mut self.athletics,
            Skill::Deception => &mut self.deception,
            Skill::History => &mut self.history,
            Skill::Insight => &mut self.insight,
            Skill::Intimidation => &mut self.intimidation,
            Skill::Investigation => &mut self.investigation,
            Skill::Medicine => &mut self.medicine,
            Skill::Nature => &mut self.nature,
            Skill::Perception => &mut self.perception,
            Skill::Performance => &mut self.performance,
            Skill::Persuasion => &mut self.persuasion,
            Skill::Religion => &mut self.religion,
            Skill::SleightOfHand => &mut self.sleight_of_hand,
            Skill::Stealth => &mut self.stealth,
            Skill::Survival => &mut self.survival,
        }
    }
}
