// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option identity.
//!
//! Two options are "the same" when, in order:
//!
//! 1. they are equal;
//! 2. both are records whose label fields are present and equal;
//! 3. one is a record and the other a primitive, and the record's label field
//!    equals the primitive.
//!
//! Label fields compare by their string form, so `{label: 1}` matches `"1"`.
//! Rule 3 lets raw search text or a scalar selection match record options
//! without the caller building a record.
//!
//! The same rule backs "is this selected" (multi-select), "deselect", and
//! "does this option already exist" checks.

use crate::choice::{Choice, Record, Scalar};

/// Returns `true` if `a` and `b` denote the same option under `label_key`.
///
/// ```rust
/// use understory_select::{Choice, Record, same_option};
///
/// let red = Choice::from(Record::new().with("label", "Red").with("hex", "#f00"));
/// let also_red = Choice::from(Record::new().with("label", "Red"));
///
/// assert!(same_option(&red, &also_red, "label"));
/// assert!(same_option(&red, &Choice::text("Red"), "label"));
/// assert!(!same_option(&Choice::text("Red"), &Choice::text("red"), "label"));
/// ```
#[must_use]
pub fn same_option(a: &Choice, b: &Choice, label_key: &str) -> bool {
    if a == b {
        return true;
    }
    match (a, b) {
        (Choice::Record(left), Choice::Record(right)) => {
            match (left.get(label_key), right.get(label_key)) {
                (Some(l), Some(r)) => l.as_label() == r.as_label(),
                _ => false,
            }
        }
        (Choice::Record(record), Choice::Primitive(scalar))
        | (Choice::Primitive(scalar), Choice::Record(record)) => {
            label_equals(record, scalar, label_key)
        }
        (Choice::Primitive(_), Choice::Primitive(_)) => false,
    }
}

fn label_equals(record: &Record, scalar: &Scalar, label_key: &str) -> bool {
    record
        .get(label_key)
        .is_some_and(|label| label.as_label() == scalar.as_label())
}

/// [`same_option`] bound to a label key, with sequence helpers.
#[derive(Copy, Clone, Debug)]
pub struct OptionMatcher<'a> {
    label_key: &'a str,
}

impl<'a> OptionMatcher<'a> {
    /// Creates a matcher comparing labels under `label_key`.
    #[must_use]
    pub const fn new(label_key: &'a str) -> Self {
        Self { label_key }
    }

    /// Returns `true` if `a` and `b` denote the same option.
    #[must_use]
    pub fn matches(&self, a: &Choice, b: &Choice) -> bool {
        same_option(a, b, self.label_key)
    }

    /// Returns the index of the first entry of `options` matching `option`.
    #[must_use]
    pub fn position_in(&self, options: &[Choice], option: &Choice) -> Option<usize> {
        options.iter().position(|candidate| self.matches(candidate, option))
    }

    /// Returns `true` if any entry of `options` matches `option`.
    #[must_use]
    pub fn contains(&self, options: &[Choice], option: &Choice) -> bool {
        self.position_in(options, option).is_some()
    }
}
