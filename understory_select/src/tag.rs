// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Creating options from free text.

use core::fmt;

use crate::choice::{Choice, Record};
use crate::config::CreateOptionFn;

/// Default tag creator.
///
/// When the existing options are records, a primitive `raw` is wrapped as
/// `{ [label_key]: raw }` so the new option has the same shape. Anything else
/// is returned unchanged.
///
/// ```rust
/// use understory_select::{Choice, Record, create_option};
///
/// let records = [Choice::from(Record::new().with("label", "a"))];
/// let created = create_option(Choice::text("new"), &records, "label");
/// assert_eq!(created, Choice::from(Record::new().with("label", "new")));
///
/// let strings = [Choice::text("a")];
/// assert_eq!(create_option(Choice::text("new"), &strings, "label"), Choice::text("new"));
/// ```
#[must_use]
pub fn create_option(raw: Choice, existing: &[Choice], label_key: &str) -> Choice {
    match (existing.first(), raw) {
        (Some(Choice::Record(_)), Choice::Primitive(scalar)) => {
            Choice::Record(Record::new().with(label_key, scalar))
        }
        (_, raw) => raw,
    }
}

/// Tag creation with an optional host override.
#[derive(Copy, Clone)]
pub struct TagCreator<'a> {
    label_key: &'a str,
    custom: Option<&'a CreateOptionFn>,
}

impl fmt::Debug for TagCreator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagCreator")
            .field("label_key", &self.label_key)
            .field("has_custom", &self.custom.is_some())
            .finish()
    }
}

impl<'a> TagCreator<'a> {
    /// Creates a tag creator that wraps text under `label_key`.
    #[must_use]
    pub const fn new(label_key: &'a str) -> Self {
        Self {
            label_key,
            custom: None,
        }
    }

    /// Uses `custom` instead of [`create_option`] when it is `Some`.
    #[must_use]
    pub const fn with_custom(mut self, custom: Option<&'a CreateOptionFn>) -> Self {
        self.custom = custom;
        self
    }

    /// Turns `raw` into a new option shaped like `existing`.
    #[must_use]
    pub fn create(&self, raw: Choice, existing: &[Choice]) -> Choice {
        match self.custom {
            Some(custom) => custom(raw),
            None => create_option(raw, existing, self.label_key),
        }
    }
}
