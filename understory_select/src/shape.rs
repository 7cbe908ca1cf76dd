// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation between whole options and identifier values at the host boundary.
//!
//! Hosts that only care about an identifier (for example a database id) can
//! configure a value key. The controller then keeps whole options internally
//! and exchanges only the identifier field with the host.

use alloc::vec::Vec;

use crate::choice::{Choice, Scalar};
use crate::value::SelectValue;

/// Maps values between the host's shape and the controller's working shape.
///
/// Without a key both directions are identities, apart from reshaping to the
/// requested multiplicity.
///
/// ```rust
/// use understory_select::{Choice, Record, SelectValue, ValueShape};
///
/// let options = vec![
///     Choice::from(Record::new().with("id", 1).with("label", "X")),
///     Choice::from(Record::new().with("id", 2).with("label", "Y")),
/// ];
/// let shape = ValueShape::new(Some("id"));
///
/// let internal = shape.to_internal(&SelectValue::from(Choice::from(2)), &options, false);
/// assert_eq!(internal, SelectValue::from(options[1].clone()));
/// assert_eq!(shape.to_external(&internal), SelectValue::from(Choice::from(2)));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct ValueShape<'a> {
    key: Option<&'a str>,
}

impl<'a> ValueShape<'a> {
    /// Creates an adapter keyed on `key`; `None` disables translation.
    #[must_use]
    pub const fn new(key: Option<&'a str>) -> Self {
        Self { key }
    }

    /// Returns the identifier key, if any.
    #[must_use]
    pub const fn key(&self) -> Option<&'a str> {
        self.key
    }

    /// Translates a host value into the working shape.
    ///
    /// With a key, each identifier is resolved to the first option in
    /// `options` whose key field equals it. Unresolved identifiers are dropped.
    /// In multi mode a non-list value counts as an empty list.
    #[must_use]
    pub fn to_internal(
        &self,
        external: &SelectValue,
        options: &[Choice],
        multiple: bool,
    ) -> SelectValue {
        let Some(key) = self.key else {
            return external.clone().coerce(multiple);
        };

        if multiple {
            let SelectValue::Multiple(ids) = external else {
                return SelectValue::Multiple(Vec::new());
            };
            let mut resolved: Vec<Choice> = Vec::with_capacity(ids.len());
            for option in ids.iter().filter_map(|id| find_by_key(options, key, id)) {
                if !resolved.contains(option) {
                    resolved.push(option.clone());
                }
            }
            SelectValue::Multiple(resolved)
        } else {
            let found = match external {
                SelectValue::Single(Some(id)) => find_by_key(options, key, id).cloned(),
                _ => None,
            };
            SelectValue::Single(found)
        }
    }

    /// Translates a working value into the host's shape.
    ///
    /// With a key, record options become their key field. A single record
    /// without the field becomes `None`; in a list it becomes `Null` so
    /// positions are preserved. Primitive options pass through.
    #[must_use]
    pub fn to_external(&self, internal: &SelectValue) -> SelectValue {
        let Some(key) = self.key else {
            return internal.clone();
        };

        match internal {
            SelectValue::Single(option) => {
                SelectValue::Single(option.as_ref().and_then(|option| identify(option, key)))
            }
            SelectValue::Multiple(options) => SelectValue::Multiple(
                options
                    .iter()
                    .map(|option| {
                        identify(option, key).unwrap_or(Choice::Primitive(Scalar::Null))
                    })
                    .collect(),
            ),
        }
    }
}

fn find_by_key<'o>(options: &'o [Choice], key: &str, id: &Choice) -> Option<&'o Choice> {
    let Choice::Primitive(id) = id else {
        return None;
    };
    options.iter().find(|option| option.field(key) == Some(id))
}

fn identify(option: &Choice, key: &str) -> Option<Choice> {
    match option {
        Choice::Record(record) => record.get(key).cloned().map(Choice::Primitive),
        primitive @ Choice::Primitive(_) => Some(primitive.clone()),
    }
}
