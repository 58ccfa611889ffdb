//! Keyed access to the fixed stat tables.
//!
//! Attributes, saving throws and skills are stored as explicit struct fields so
//! the document shape is fixed, but the derivation stages address them through
//! these traits so each rule is written once instead of once per field.

use super::dependent::Dependent;

/// A stat entry that owns a dependent modifier.
pub trait ModifierSlot {
    fn modifier(&self) -> Dependent<i32>;

    fn modifier_mut(&mut self) -> &mut Dependent<i32>;
}

/// A table of stat entries addressed by a closed key enumeration.
///
/// `entry` and `entry_mut` are exhaustive matches over `Key`, so an unknown
/// key cannot be expressed.
pub trait KeyedStats {
    type Key: Copy + AsRef<str> + 'static;
    type Entry: ModifierSlot;

    /// Document key of the section holding this table (e.g. `skills`).
    const SECTION: &'static str;

    /// Every key of the table, in document order.
    const KEYS: &'static [Self::Key];

    fn entry(&self, key: Self::Key) -> &Self::Entry;

    fn entry_mut(&mut self, key: Self::Key) -> &mut Self::Entry;

    fn modifier(&self, key: Self::Key) -> Dependent<i32> {
        self.entry(key).modifier()
    }

    fn set_modifier(&mut self, key: Self::Key, value: i32) {
        self.entry_mut(key).modifier_mut().set(value);
    }

    /// Document path of a key's modifier, e.g. `skills.athletics.modifier`.
    fn modifier_path(key: Self::Key) -> String {
        format!("{}.{}.modifier", Self::SECTION, key.as_ref())
    }
}
