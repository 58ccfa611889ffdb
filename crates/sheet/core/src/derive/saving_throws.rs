//! Stage 2: ability modifier → saving throw modifier.

use super::{AbilityModifiers, DeriveError, apply_modifiers};
use crate::config::DerivationPolicy;
use crate::sheet::SavingThrowStats;

/// Copy each ability modifier into the matching saving throw.
///
/// Proficiency, expertise and misc bonus are not added. Under
/// [`DerivationPolicy::Overwrite`] this cannot fail.
pub fn derive_saving_throw_modifiers(
    saving_throws: &mut SavingThrowStats,
    modifiers: &AbilityModifiers,
    policy: DerivationPolicy,
) -> Result<(), DeriveError> {
    apply_modifiers(saving_throws, |ability| modifiers.get(ability), policy)
}
