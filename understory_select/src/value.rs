// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection values.

use alloc::vec::Vec;

use crate::choice::Choice;

/// The value of a select control: one optional option, or a list of options.
///
/// A controller keeps its working value in the variant matching its
/// multiplicity; [`SelectValue::coerce`] reshapes host-supplied values.
///
/// ```rust
/// use understory_select::{Choice, SelectValue};
///
/// let single = SelectValue::from(Choice::text("a"));
/// assert_eq!(single.coerce(true), SelectValue::Multiple(vec![Choice::text("a")]));
/// assert_eq!(SelectValue::empty(false), SelectValue::Single(None));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SelectValue {
    /// Single-select value; `None` when nothing is selected.
    Single(Option<Choice>),
    /// Multi-select value, in selection order.
    Multiple(Vec<Choice>),
}

impl Default for SelectValue {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl SelectValue {
    /// Returns the empty value for the given multiplicity.
    #[must_use]
    pub const fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(None)
        }
    }

    /// Returns `true` for the [`SelectValue::Multiple`] variant.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Reshapes this value into the given multiplicity.
    ///
    /// A single option becomes a one-element list; a list keeps only its first
    /// entry when narrowed.
    #[must_use]
    pub fn coerce(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Self::Single(option), true) => Self::Multiple(option.into_iter().collect()),
            (Self::Multiple(options), false) => Self::Single(options.into_iter().next()),
            (value, _) => value,
        }
    }

    /// Returns the selected options as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Choice] {
        match self {
            Self::Single(Some(option)) => core::slice::from_ref(option),
            Self::Single(None) => &[],
            Self::Multiple(options) => options,
        }
    }

    /// Returns the number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` when no option is selected.
    ///
    /// A single value holding a blank option (`Null`, empty text, or a record
    /// without fields) also counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(Some(option)) => option.is_blank(),
            Self::Single(None) => true,
            Self::Multiple(options) => options.is_empty(),
        }
    }

    /// Iterates over the selected options.
    pub fn iter(&self) -> core::slice::Iter<'_, Choice> {
        self.as_slice().iter()
    }
}

impl From<Choice> for SelectValue {
    fn from(value: Choice) -> Self {
        Self::Single(Some(value))
    }
}

impl From<Option<Choice>> for SelectValue {
    fn from(value: Option<Choice>) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Choice>> for SelectValue {
    fn from(value: Vec<Choice>) -> Self {
        Self::Multiple(value)
    }
}

impl<'a> IntoIterator for &'a SelectValue {
    type Item = &'a Choice;
    type IntoIter = core::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
