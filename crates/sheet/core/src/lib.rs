//! Character sheet model and derivation rules shared by every ledgr tool.
//!
//! `sheet-core` defines the canonical shape of a character record and the
//! fixed rules that fill in its dependent fields. It performs no I/O; loaders
//! and validators live in `sheet-content`. All derivation flows through
//! [`derive::derive_sheet`], which runs the three stages in order:
//!
//! ```text
//! [ Attribute scores ] → ability modifiers
//!        ↓
//! [ Saving throws ]    ← copy of each ability modifier
//!        ↓
//! [ Skills ]           ← copy of the governing ability modifier
//! ```
pub mod config;
pub mod derive;
pub mod error;
pub mod mechanics;
pub mod sheet;

pub use config::{DerivationConfig, DerivationPolicy};
pub use derive::{
    AbilityModifiers, DeriveError, derive_attribute_modifiers, derive_saving_throw_modifiers,
    derive_sheet, derive_skill_modifiers,
};
pub use error::{ErrorSeverity, SheetError};
pub use mechanics::{InvalidScore, ability_modifier};
pub use sheet::{
    Ability, ArmorClassStats, AttributeStats, CharacterBasics, CharacterSheet, CombatStats,
    Dependent, HealthStats, InitiativeStats, KeyedStats, ModifierSlot, SavingThrowStats,
    SingleAttribute, SingleSavingThrow, SingleSkill, Skill, SkillStats, SpeedStats,
    SpellcastingStats,
};
