//! Ability score → ability modifier.
//!
//! Formula: modifier = floor((score - 10) / 2)

use crate::config::DerivationConfig;
use crate::error::{ErrorSeverity, SheetError};

/// Raised when a negative ability score reaches the modifier function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("ability score must be non-negative, got {score}")]
pub struct InvalidScore {
    pub score: i32,
}

impl SheetError for InvalidScore {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_SCORE"
    }
}

/// Calculate the ability modifier for a score.
///
/// Rounds toward negative infinity, so odd scores below the baseline lose a
/// full point:
/// - 10-11 → +0
/// - 16 → +3
/// - 9 → -1
/// - 7 → -2
/// - 0 → -5
pub fn ability_modifier(score: i32) -> Result<i32, InvalidScore> {
    if score < 0 {
        return Err(InvalidScore { score });
    }
    Ok((score - DerivationConfig::MODIFIER_BASELINE).div_euclid(2))
}
