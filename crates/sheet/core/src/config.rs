/// How the derivation stages treat a dependent field that already holds a value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DerivationPolicy {
    /// Replace every dependent value with the computed one.
    #[default]
    Overwrite,
    /// Fill unset values; keep set values only if they equal the computed one.
    ValidateAndKeep,
}

/// Derivation settings for a single pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivationConfig {
    /// Policy applied to dependent fields that are already set.
    pub policy: DerivationPolicy,
}

impl DerivationConfig {
    // ===== rule constants =====
    /// Score at which the ability modifier is zero.
    pub const MODIFIER_BASELINE: i32 = 10;
    /// Nominal upper bound of an ability score.
    pub const MAX_NOMINAL_SCORE: i32 = 30;
    /// Schema version this crate reads and writes.
    pub const SCHEMA_VERSION: u16 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DerivationPolicy) -> Self {
        Self { policy }
    }
}
