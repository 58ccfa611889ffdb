//! Identity and build metadata.
//!
//! These fields are authored input and never derived. They are checked by the
//! schema only (non-empty name, level range).

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CharacterBasics {
    /// Display name; free-form.
    pub name: String,

    /// Age in years, omitted if unknown.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub age: Option<u16>,

    /// Primary class name (e.g. "fighter").
    // TODO: move to a list of class/level pairs once multiclass sheets are supported.
    pub class: String,

    /// Total character level.
    pub level: u8,

    /// Ancestry or species; free-form.
    pub race: String,

    /// Narrative metadata; not mechanically enforced.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub alignment: Option<String>,
}
