//! Stage 3: governing ability modifier → skill modifier.

use super::{AbilityModifiers, DeriveError, apply_modifiers};
use crate::config::DerivationPolicy;
use crate::sheet::SkillStats;

/// Copy the governing ability's modifier into every skill.
///
/// The governing ability comes from [`crate::Skill::governing_ability`];
/// `related_attribute` is ignored.
pub fn derive_skill_modifiers(
    skills: &mut SkillStats,
    modifiers: &AbilityModifiers,
    policy: DerivationPolicy,
) -> Result<(), DeriveError> {
    apply_modifiers(
        skills,
        |skill| modifiers.get(skill.governing_ability()),
        policy,
    )
}
