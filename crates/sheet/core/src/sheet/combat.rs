//! Sheet-facing combat numbers: armor class, initiative and speeds.
//!
//! Totals here are authored (or left out); the derivation stages never touch
//! them. The `misc_bonus` hooks are stored for a later totals stage.

use super::dependent::Dependent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ArmorClassStats {
    #[cfg_attr(feature = "serde", serde(default))]
    pub misc_bonus: i32,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub total: Dependent<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct InitiativeStats {
    #[cfg_attr(feature = "serde", serde(default))]
    pub misc_bonus: i32,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Dependent::is_unset")
    )]
    pub total: Dependent<i32>,
}

/// Movement speeds. A mode the character lacks is omitted, not zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SpeedStats {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub walk: Option<u16>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fly: Option<u16>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub swim: Option<u16>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub climb: Option<u16>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub burrow: Option<u16>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CombatStats {
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor_class: ArmorClassStats,

    #[cfg_attr(feature = "serde", serde(default))]
    pub initiative: InitiativeStats,

    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: SpeedStats,
}
