//! Tri-state holder for dependent (derivable) fields.

/// A value that may be authored, previously derived, or left for derivation.
///
/// In a document, an absent key reads as [`Dependent::Unset`] and any present
/// value (including zero) reads as [`Dependent::Set`]. Unset values are
/// omitted again on output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dependent<T> {
    /// Not provided; the derivation stage must compute it.
    Unset,
    /// Authored or previously derived value.
    Set(T),
}

impl<T> Dependent<T> {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Self::Set(value);
    }
}

impl<T: Copy> Dependent<T> {
    /// Returns the held value, if any.
    pub const fn value(&self) -> Option<T> {
        match self {
            Self::Set(value) => Some(*value),
            Self::Unset => None,
        }
    }
}

impl<T> Default for Dependent<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for Dependent<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Unset,
        }
    }
}

impl<T> From<Dependent<T>> for Option<T> {
    fn from(value: Dependent<T>) -> Self {
        match value {
            Dependent::Set(value) => Some(value),
            Dependent::Unset => None,
        }
    }
}

// Serialized through `Option<T>` so documents carry a plain scalar or nothing.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Dependent<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Dependent<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
