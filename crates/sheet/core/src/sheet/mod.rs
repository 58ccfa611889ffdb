//! Canonical data model of a character sheet document.
//!
//! Field names match the authored document keys. Some fields are authored
//! truths (scores, proficiency flags); others are dependent and held in a
//! [`Dependent`] so that "absent" and "explicitly zero" stay distinct.

pub mod abilities;
pub mod basics;
pub mod combat;
pub mod dependent;
pub mod health;
pub mod keyed;
pub mod saving_throws;
pub mod skills;
pub mod spellcasting;

pub use abilities::{Ability, AttributeStats, SingleAttribute};
pub use basics::CharacterBasics;
pub use combat::{ArmorClassStats, CombatStats, InitiativeStats, SpeedStats};
pub use dependent::Dependent;
pub use health::HealthStats;
pub use keyed::{KeyedStats, ModifierSlot};
pub use saving_throws::{SavingThrowStats, SingleSavingThrow};
pub use skills::{SingleSkill, Skill, SkillStats};
pub use spellcasting::SpellcastingStats;

use crate::config::DerivationConfig;

/// Root character document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CharacterSheet {
    pub schema_version: u16,

    pub basics: CharacterBasics,
    pub attributes: AttributeStats,
    pub saving_throws: SavingThrowStats,
    pub skills: SkillStats,
    pub health: HealthStats,

    /// Armor class, initiative and speeds; omitted on build-only sheets.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub combat: Option<CombatStats>,

    /// Omitted for non-spellcasters.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub spellcasting: Option<SpellcastingStats>,
}

impl CharacterSheet {
    /// Create a sheet at the current schema version with the given identity
    /// and scores. Every dependent field starts unset.
    pub fn new(basics: CharacterBasics, attributes: AttributeStats) -> Self {
        Self {
            schema_version: DerivationConfig::SCHEMA_VERSION,
            basics,
            attributes,
            saving_throws: SavingThrowStats::default(),
            skills: SkillStats::default(),
            health: HealthStats::default(),
            combat: None,
            spellcasting: None,
        }
    }
}
