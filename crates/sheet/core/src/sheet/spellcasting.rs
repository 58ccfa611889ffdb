use super::abilities::Ability;
use super::dependent::Dependent;

/// Spellcasting numbers; present only for spellcasters.
///
/// The DC and attack bonus are authored or absent; nothing here is derived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SpellcastingStats {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub spellcasting_ability: Option<Ability>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub spell_save_dc: Dependent<i32>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub spell_attack_bonus: Dependent<i32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub misc_bonus: i32,
}
