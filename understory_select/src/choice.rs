// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The option data model.
//!
//! A [`Choice`] is either a primitive [`Scalar`] or a structured [`Record`].
//! Keeping the two shapes as explicit variants lets the matcher spell out its
//! record-versus-primitive fallback as a plain `match`.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

use smallvec::SmallVec;

/// Number of record fields stored inline before spilling to the heap.
const INLINE_FIELDS: usize = 4;

/// A primitive option value, or a field value inside a [`Record`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Scalar {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
}

impl Scalar {
    /// Returns the label form of this scalar.
    ///
    /// Numbers are coerced to their string form, so `Int(1)` and `Text("1")`
    /// produce the same label.
    ///
    /// ```rust
    /// use understory_select::Scalar;
    ///
    /// assert_eq!(Scalar::Int(7).as_label(), "7");
    /// assert_eq!(Scalar::Float(1.5).as_label(), "1.5");
    /// assert_eq!(Scalar::from("red").as_label(), "red");
    /// ```
    #[must_use]
    pub fn as_label(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Int(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(value.to_string()),
        }
    }

    /// Returns the string slice if this is a [`Scalar::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for [`Scalar::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for values that carry no content: `Null` and empty text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_label())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A structured option: an ordered set of named [`Scalar`] fields.
///
/// Records are compared field-by-field regardless of insertion order.
/// Small records (up to four fields) are stored inline.
///
/// ```rust
/// use understory_select::{Record, Scalar};
///
/// let record = Record::new().with("id", 1).with("label", "One");
/// assert_eq!(record.get("label"), Some(&Scalar::from("One")));
/// assert!(record.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Record {
    fields: SmallVec<[(String, Scalar); INLINE_FIELDS]>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Returns this record with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if the field existed.
    ///
    /// Existing fields keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        let key = key.into();
        let value = value.into();
        if let Some((_, slot)) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.fields.push((key, value));
        None
    }

    /// Returns the value of field `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the record has a field named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match value {
                Scalar::Text(text) => write!(f, "{key:?}: {text:?}")?,
                other => write!(f, "{key:?}: {other}")?,
            }
        }
        f.write_str("}")
    }
}

/// A selectable option: a primitive or a structured record.
#[derive(Clone, Debug, PartialEq)]
pub enum Choice {
    /// A string, number, or other scalar option.
    Primitive(Scalar),
    /// A structured option carrying a label field and possibly an identifier field.
    Record(Record),
}

impl Choice {
    /// Creates a text option.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Primitive(Scalar::Text(text.into()))
    }

    /// Returns the record if this is a [`Choice::Record`].
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            Self::Primitive(_) => None,
        }
    }

    /// Returns the scalar if this is a [`Choice::Primitive`].
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Primitive(scalar) => Some(scalar),
            Self::Record(_) => None,
        }
    }

    /// Returns `true` if this is a [`Choice::Record`].
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns field `key` of a record option; primitives have no fields.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Scalar> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Returns `true` for options that carry no content.
    ///
    /// Null and empty-text primitives are blank, as are records without fields.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Primitive(scalar) => scalar.is_blank(),
            Self::Record(record) => record.is_empty(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(scalar) => fmt::Display::fmt(scalar, f),
            Self::Record(record) => fmt::Display::fmt(record, f),
        }
    }
}

impl From<Scalar> for Choice {
    fn from(value: Scalar) -> Self {
        Self::Primitive(value)
    }
}

impl From<Record> for Choice {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::Primitive(value.into())
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::Primitive(value.into())
    }
}

impl From<i32> for Choice {
    fn from(value: i32) -> Self {
        Self::Primitive(value.into())
    }
}

impl From<i64> for Choice {
    fn from(value: i64) -> Self {
        Self::Primitive(value.into())
    }
}

impl From<f64> for Choice {
    fn from(value: f64) -> Self {
        Self::Primitive(value.into())
    }
}
