//! Discrete block properties.

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tessera_core::{Axis, Error, Face, Result};

/// A single allowed value of a property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Face(Face),
    Axis(Axis),
    Name(Cow<'static, str>),
}

impl PropertyValue {
    /// The face, if this is a face value.
    #[must_use]
    pub const fn as_face(&self) -> Option<Face> {
        match self {
            Self::Face(face) => Some(*face),
            _ => None,
        }
    }

    /// The axis, if this is an axis value.
    #[must_use]
    pub const fn as_axis(&self) -> Option<Axis> {
        match self {
            Self::Axis(axis) => Some(*axis),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Face(face) => write!(f, "{face}"),
            Self::Axis(axis) => write!(f, "{axis}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<Face> for PropertyValue {
    fn from(face: Face) -> Self {
        Self::Face(face)
    }
}

impl From<Axis> for PropertyValue {
    fn from(axis: Axis) -> Self {
        Self::Axis(axis)
    }
}

impl From<&'static str> for PropertyValue {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

/// A named configuration axis with an ordered, finite set of allowed values.
///
/// The first value is the default. Order is significant: it fixes each
/// value's digit in the compact id once the property is registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Property {
    name: Cow<'static, str>,
    values: Vec<PropertyValue>,
}

impl Property {
    /// Create a property from its allowed values.
    ///
    /// Fails if the value set is empty or repeats a value.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        values: impl IntoIterator<Item = PropertyValue>,
    ) -> Result<Self> {
        let mut property = Self {
            name: name.into(),
            values: Vec::new(),
        };
        for value in values {
            property.allow(value)?;
        }
        if property.values.is_empty() {
            return Err(Error::InvalidProperty {
                property: property.name.into_owned(),
                reason: "no allowed values".to_string(),
            });
        }
        Ok(property)
    }

    /// `false`, `true`
    #[must_use]
    pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            values: vec![PropertyValue::Bool(false), PropertyValue::Bool(true)],
        }
    }

    /// `x`, `y`, `z`
    #[must_use]
    pub fn axis(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            values: Axis::ALL.into_iter().map(PropertyValue::Axis).collect(),
        }
    }

    /// The given faces, in order.
    pub fn faces(name: impl Into<Cow<'static, str>>, faces: &[Face]) -> Result<Self> {
        Self::new(name, faces.iter().copied().map(PropertyValue::Face))
    }

    /// Faces from a fixed table known to be distinct and non-empty.
    pub(crate) fn from_faces_unchecked(name: &'static str, faces: &[Face]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            values: faces.iter().copied().map(PropertyValue::Face).collect(),
        }
    }

    /// Names from a fixed table known to be distinct and non-empty.
    pub(crate) fn from_names_unchecked(name: &'static str, values: &[&'static str]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            values: values.iter().copied().map(PropertyValue::from).collect(),
        }
    }

    /// Every integer in the range, ascending.
    pub fn int_range(
        name: impl Into<Cow<'static, str>>,
        range: RangeInclusive<i32>,
    ) -> Result<Self> {
        Self::new(name, range.map(PropertyValue::Int))
    }

    /// Symbolic values, in order.
    pub fn named(name: impl Into<Cow<'static, str>>, values: &[&'static str]) -> Result<Self> {
        Self::new(name, values.iter().copied().map(PropertyValue::from))
    }

    /// Append an allowed value.
    ///
    /// Layouts snapshot values at registration, so this never affects a
    /// block type that has already registered the property.
    pub fn allow(&mut self, value: PropertyValue) -> Result<()> {
        if self.values.contains(&value) {
            return Err(Error::InvalidProperty {
                property: self.name.to_string(),
                reason: format!("value {value} listed twice"),
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allowed values in order.
    #[must_use]
    pub fn values(&self) -> &[PropertyValue] {
        &self.values
    }

    /// Number of allowed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed property.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position of a value in the allowed list.
    #[must_use]
    pub fn index_of(&self, value: &PropertyValue) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Whether the value is allowed.
    #[must_use]
    pub fn allows(&self, value: &PropertyValue) -> bool {
        self.index_of(value).is_some()
    }
}
