// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label resolution for options.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

use crate::choice::{Choice, Record};
use crate::config::LabelFn;

/// Error returned when a record option has no field under the label key.
#[derive(Clone, PartialEq)]
pub struct MissingLabel {
    /// The configured label key.
    pub key: String,
    /// The offending option.
    pub option: Record,
}

impl fmt::Debug for MissingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MissingLabel {{ key: {:?}, option: {} }}",
            self.key, self.option
        )
    }
}

impl fmt::Display for MissingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "label key \"option.{}\" does not exist in options object {}",
            self.key, self.option
        )
    }
}

impl core::error::Error for MissingLabel {}

/// Resolves display labels for options.
///
/// A custom label function, when present, fully replaces the label-key lookup.
///
/// ```rust
/// use understory_select::{Choice, LabelAccessor, Record};
///
/// let labels = LabelAccessor::new("name");
/// let option = Choice::from(Record::new().with("name", "Ada"));
/// assert_eq!(labels.label(&option), "Ada");
/// assert_eq!(labels.label(&Choice::from(42)), "42");
/// ```
#[derive(Copy, Clone)]
pub struct LabelAccessor<'a> {
    key: &'a str,
    custom: Option<&'a LabelFn>,
}

impl fmt::Debug for LabelAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelAccessor")
            .field("key", &self.key)
            .field("has_custom", &self.custom.is_some())
            .finish()
    }
}

impl<'a> LabelAccessor<'a> {
    /// Creates an accessor that looks labels up under `key`.
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self { key, custom: None }
    }

    /// Routes every lookup through `custom` when it is `Some`.
    #[must_use]
    pub const fn with_custom(mut self, custom: Option<&'a LabelFn>) -> Self {
        self.custom = custom;
        self
    }

    /// Returns the label key.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the label of `option`.
    ///
    /// A record missing the label key logs a warning and falls back to the
    /// record's own display form.
    #[must_use]
    pub fn label<'o>(&self, option: &'o Choice) -> Cow<'o, str> {
        match self.try_label(option) {
            Ok(label) => label,
            Err(missing) => {
                tracing::warn!(key = self.key, "{missing}");
                Cow::Owned(missing.option.to_string())
            }
        }
    }

    /// Returns the label of `option`, or [`MissingLabel`] for a record
    /// without the label key.
    pub fn try_label<'o>(&self, option: &'o Choice) -> Result<Cow<'o, str>, MissingLabel> {
        if let Some(custom) = self.custom {
            return Ok(Cow::Owned(custom(option)));
        }
        match option {
            Choice::Primitive(scalar) => Ok(scalar.as_label()),
            Choice::Record(record) => self.record_label(record).ok_or_else(|| MissingLabel {
                key: self.key.into(),
                option: record.clone(),
            }),
        }
    }

    /// Looks up the label field of `record`, ignoring any custom function.
    #[must_use]
    pub fn record_label<'o>(&self, record: &'o Record) -> Option<Cow<'o, str>> {
        record.get(self.key).map(|value| value.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::format;

    #[test]
    fn record_label_uses_key() {
        let labels = LabelAccessor::new("title");
        let option = Choice::from(Record::new().with("title", "Dune").with("id", 3));
        assert_eq!(labels.label(&option), "Dune");
    }

    #[test]
    fn numeric_label_fields_are_stringified() {
        let labels = LabelAccessor::new("label");
        let option = Choice::from(Record::new().with("label", 12));
        assert_eq!(labels.label(&option), "12");
    }

    #[test]
    fn missing_key_degrades_to_raw_option() {
        let labels = LabelAccessor::new("label");
        let option = Choice::from(Record::new().with("name", "x"));

        let err = labels.try_label(&option).unwrap_err();
        assert_eq!(err.key, "label");
        assert!(format!("{err}").contains("option.label"));

        assert_eq!(labels.label(&option), r#"{"name": "x"}"#);
    }

    #[test]
    fn custom_label_overrides_lookup() {
        let custom: LabelFn = Box::new(|option| format!("<{option}>"));
        let labels = LabelAccessor::new("label").with_custom(Some(&custom));
        let record = Choice::from(Record::new().with("name", "x"));

        // The custom function also covers records without the label key.
        assert!(labels.try_label(&record).is_ok());
        assert_eq!(labels.label(&Choice::text("a")), "<a>");
    }
}
