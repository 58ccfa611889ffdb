//! Derivation stages that fill the dependent fields of a sheet.
//!
//! Stages run in a fixed order because later stages copy values produced by
//! the first one:
//!
//! 1. [`derive_attribute_modifiers`] - score → modifier for all six abilities
//! 2. [`derive_saving_throw_modifiers`] - ability modifier → saving throw
//! 3. [`derive_skill_modifiers`] - governing ability modifier → skill
//!
//! The ordering is enforced by types: stages 2 and 3 take the
//! [`AbilityModifiers`] returned by stage 1.

mod attributes;
mod saving_throws;
mod skills;

pub use attributes::{AbilityModifiers, derive_attribute_modifiers};
pub use saving_throws::derive_saving_throw_modifiers;
pub use skills::derive_skill_modifiers;

use crate::config::{DerivationConfig, DerivationPolicy};
use crate::error::{ErrorSeverity, SheetError};
use crate::mechanics::InvalidScore;
use crate::sheet::{Ability, CharacterSheet, Dependent, KeyedStats};

/// Errors raised while deriving dependent fields.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    #[error("attributes.{ability}.score: {source}")]
    InvalidScore {
        ability: Ability,
        #[source]
        source: InvalidScore,
    },

    #[error("{field}: authored value {authored} does not match derived value {computed}")]
    ModifierMismatch {
        field: String,
        authored: i32,
        computed: i32,
    },
}

impl DeriveError {
    /// Document path of the offending field.
    pub fn path(&self) -> String {
        match self {
            Self::InvalidScore { ability, .. } => format!("attributes.{ability}.score"),
            Self::ModifierMismatch { field, .. } => field.clone(),
        }
    }
}

impl SheetError for DeriveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScore { .. } => "INVALID_SCORE",
            Self::ModifierMismatch { .. } => "MODIFIER_MISMATCH",
        }
    }
}

/// Run all three stages on a sheet.
///
/// The sheet is only updated if every stage succeeds; on error it is left
/// exactly as it was passed in.
pub fn derive_sheet(
    sheet: &mut CharacterSheet,
    config: &DerivationConfig,
) -> Result<(), DeriveError> {
    let mut next = sheet.clone();

    let modifiers = derive_attribute_modifiers(&mut next.attributes, config.policy)?;
    derive_saving_throw_modifiers(&mut next.saving_throws, &modifiers, config.policy)?;
    derive_skill_modifiers(&mut next.skills, &modifiers, config.policy)?;

    *sheet = next;
    Ok(())
}

/// Write computed modifiers into a keyed table under the given policy.
///
/// Every key is checked before any value is written, so a mismatch leaves the
/// table untouched.
fn apply_modifiers<T, F>(
    table: &mut T,
    computed: F,
    policy: DerivationPolicy,
) -> Result<(), DeriveError>
where
    T: KeyedStats,
    F: Fn(T::Key) -> i32,
{
    if policy == DerivationPolicy::ValidateAndKeep {
        for &key in T::KEYS {
            let expected = computed(key);
            match table.modifier(key) {
                Dependent::Set(authored) if authored != expected => {
                    return Err(DeriveError::ModifierMismatch {
                        field: T::modifier_path(key),
                        authored,
                        computed: expected,
                    });
                }
                _ => {}
            }
        }
    }

    for &key in T::KEYS {
        table.set_modifier(key, computed(key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{AttributeStats, CharacterBasics, Skill};

    fn sample_sheet() -> CharacterSheet {
        CharacterSheet::new(
            CharacterBasics {
                name: "Brenna Ashdown".into(),
                class: "fighter".into(),
                level: 4,
                race: "human".into(),
                ..CharacterBasics::default()
            },
            AttributeStats::from_scores([14, 12, 15, 9, 8, 11]),
        )
    }

    #[test]
    fn saving_throws_and_skills_follow_ability_modifiers() {
        let mut sheet = sample_sheet();
        derive_sheet(&mut sheet, &DerivationConfig::new()).unwrap();

        for ability in Ability::ALL {
            assert_eq!(
                sheet.saving_throws.modifier(ability),
                sheet.attributes.modifier(ability)
            );
        }
        for skill in Skill::ALL {
            assert_eq!(
                sheet.skills.modifier(skill),
                sheet.attributes.modifier(skill.governing_ability())
            );
        }
        assert_eq!(sheet.skills.athletics.modifier, Dependent::Set(2));
        assert_eq!(sheet.skills.perception.modifier, Dependent::Set(-1));
        assert_eq!(sheet.skills.arcana.modifier, Dependent::Set(-1));
    }

    #[test]
    fn deriving_twice_changes_nothing() {
        let mut sheet = sample_sheet();
        let config = DerivationConfig::new();
        derive_sheet(&mut sheet, &config).unwrap();
        let once = sheet.clone();
        derive_sheet(&mut sheet, &config).unwrap();
        assert_eq!(sheet, once);

        // A second pass that validates instead of overwriting must agree too.
        let strict = DerivationConfig::with_policy(DerivationPolicy::ValidateAndKeep);
        derive_sheet(&mut sheet, &strict).unwrap();
        assert_eq!(sheet, once);
    }

    #[test]
    fn overwrite_replaces_stale_values() {
        let mut sheet = sample_sheet();
        sheet.attributes.strength.modifier = Dependent::Set(7);
        sheet.skills.stealth.modifier = Dependent::Set(-4);

        derive_sheet(&mut sheet, &DerivationConfig::new()).unwrap();
        assert_eq!(sheet.attributes.strength.modifier, Dependent::Set(2));
        assert_eq!(sheet.skills.stealth.modifier, Dependent::Set(1));
    }

    #[test]
    fn validate_and_keep_reports_the_first_disagreement() {
        let mut sheet = sample_sheet();
        sheet.saving_throws.wisdom.modifier = Dependent::Set(3);
        let before = sheet.clone();

        let err = derive_sheet(
            &mut sheet,
            &DerivationConfig::with_policy(DerivationPolicy::ValidateAndKeep),
        )
        .unwrap_err();

        assert_eq!(
            err,
            DeriveError::ModifierMismatch {
                field: "saving_throws.wisdom.modifier".into(),
                authored: 3,
                computed: -1,
            }
        );
        assert_eq!(err.path(), "saving_throws.wisdom.modifier");
        assert_eq!(err.error_code(), "MODIFIER_MISMATCH");
        assert_eq!(sheet, before);
    }

    #[test]
    fn invalid_score_leaves_sheet_untouched() {
        let mut sheet = sample_sheet();
        sheet.attributes.charisma.score = -3;
        let before = sheet.clone();

        let err = derive_sheet(&mut sheet, &DerivationConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            DeriveError::InvalidScore {
                ability: Ability::Charisma,
                ..
            }
        ));
        assert_eq!(err.path(), "attributes.charisma.score");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(sheet, before);
    }
}
