//! Tri-state field values.
//!
//! The remote API treats an omitted key ("leave unchanged") and a `null` key
//! ("clear it") as different writes, so `Option<T>` is not enough to model an
//! entity field. [`Field<T>`] keeps the two apart.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that is absent, explicitly null, or present with a value.
///
/// Struct members of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Field::is_absent")]` (or a
/// struct-level `#[serde(default)]`): a missing key then deserializes to
/// [`Field::Absent`] and an absent field never reaches the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Never supplied. Not written to the wire at all.
    Absent,
    /// Deliberately cleared. Written as `null`.
    Null,
    /// Present with a value.
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    /// Builds a field from an `Option`, mapping `None` to an explicit null.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Returns the contained value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    /// Collapses absent and null into `None`. Lossy; only for reading.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Field::Value(value);
    }

    /// Marks the field as explicitly cleared.
    pub fn clear(&mut self) {
        *self = Field::Null;
    }

    /// Forgets the field so it is omitted from the next write.
    pub fn unset(&mut self) {
        *self = Field::Absent;
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reachable when the owner forgot `skip_serializing_if`.
            Field::Absent | Field::Null => serializer.serialize_none(),
            Field::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from_option)
    }
}

/// `serialize_with` hook for float fields.
///
/// NaN and the infinities have no JSON form and would be written as `null`,
/// which reads back as [`Field::Null`]. They are rejected instead.
pub fn serialize_finite<S: Serializer>(field: &Field<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match field {
        Field::Value(v) if !v.is_finite() => Err(S::Error::custom(format!(
            "non-finite float {v} cannot be encoded"
        ))),
        other => other.serialize(serializer),
    }
}
