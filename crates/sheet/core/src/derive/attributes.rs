//! Stage 1: ability score → ability modifier.

use super::{DeriveError, apply_modifiers};
use crate::config::DerivationPolicy;
use crate::mechanics::ability_modifier;
use crate::sheet::{Ability, AttributeStats};

/// Ability modifiers produced by the attribute stage.
///
/// Later stages read from this rather than from the sheet, so they can only
/// run once stage 1 has succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityModifiers([i32; 6]);

impl AbilityModifiers {
    pub const fn get(&self, ability: Ability) -> i32 {
        self.0[ability as usize]
    }
}

/// Compute the modifier of every ability and write it into `attributes`.
///
/// All six scores are checked before anything is written: a negative score
/// fails the stage and leaves `attributes` unchanged.
pub fn derive_attribute_modifiers(
    attributes: &mut AttributeStats,
    policy: DerivationPolicy,
) -> Result<AbilityModifiers, DeriveError> {
    let mut computed = [0; 6];
    for ability in Ability::ALL {
        let score = attributes.score(ability);
        computed[ability as usize] = ability_modifier(score)
            .map_err(|source| DeriveError::InvalidScore { ability, source })?;
    }

    let modifiers = AbilityModifiers(computed);
    apply_modifiers(attributes, |ability| modifiers.get(ability), policy)?;
    Ok(modifiers)
}
