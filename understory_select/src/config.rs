// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.
//!
//! [`SelectConfig`] holds the plain flags and keys a host passes in.
//! [`OptionFns`] holds the optional host overrides for label resolution,
//! filtering, and tag creation. The defaults for those overrides
//! ([`LabelAccessor`](crate::LabelAccessor), [`default_filter`](crate::default_filter),
//! and [`create_option`](crate::create_option)) can be used without a controller.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::choice::Choice;
use crate::filter::FilterContext;

/// Resolves the display label of an option, replacing the label-key lookup.
pub type LabelFn = Box<dyn Fn(&Choice) -> String + Send + Sync>;

/// Per-option filter predicate: `(option, label, search) -> keep`.
pub type FilterByFn = Box<dyn Fn(&Choice, &str, &str) -> bool + Send + Sync>;

/// Whole-list filter: `(options, search, context) -> visible options`.
pub type FilterFn = Box<dyn Fn(&[Choice], &str, &FilterContext<'_>) -> Vec<Choice> + Send + Sync>;

/// Turns raw search input into a new option.
pub type CreateOptionFn = Box<dyn Fn(Choice) -> Choice + Send + Sync>;

/// Writing direction of the control, surfaced through
/// [`DropdownFlags::RTL`](crate::DropdownFlags::RTL).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// Determined by content.
    #[default]
    Auto,
}

/// Flags and keys for a [`SelectController`](crate::SelectController).
///
/// The defaults match a single-select, searchable, clearable control that
/// closes and clears its search text after each selection.
///
/// ```rust
/// use understory_select::SelectConfig;
///
/// let config = SelectConfig {
///     multiple: true,
///     close_on_select: false,
///     ..SelectConfig::default()
/// };
/// assert_eq!(config.label_key, "label");
/// assert!(config.clearable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SelectConfig {
    /// Whether the value is a list of options.
    pub multiple: bool,
    /// Whether a clear affordance should be shown. Does not gate
    /// [`SelectController::clear`](crate::SelectController::clear).
    pub clearable: bool,
    /// Whether the search input accepts text.
    pub searchable: bool,
    /// Whether search text filters the options.
    pub filterable: bool,
    /// Whether search text can become a new option.
    pub taggable: bool,
    /// Whether created options are appended to the working options.
    pub push_tags: bool,
    /// Whether selecting an option toggles the dropdown and blurs the search input.
    pub close_on_select: bool,
    /// Whether selecting an option clears the search text.
    pub clear_search_on_select: bool,
    /// Whether an external options change clears the value (ignored in tag mode).
    pub reset_on_options_change: bool,
    /// Keeps the dropdown closed.
    pub no_drop: bool,
    /// Disables the whole control.
    pub disabled: bool,
    /// Field of record options holding the display label.
    pub label_key: String,
    /// Field of record options exchanged with the host instead of whole options.
    pub value_key: Option<String>,
    /// Text shown in the search input while the value is empty.
    pub placeholder: String,
    /// Writing direction.
    pub dir: TextDirection,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            clearable: true,
            searchable: true,
            filterable: true,
            taggable: false,
            push_tags: false,
            close_on_select: true,
            clear_search_on_select: true,
            reset_on_options_change: false,
            no_drop: false,
            disabled: false,
            label_key: String::from("label"),
            value_key: None,
            placeholder: String::new(),
            dir: TextDirection::Auto,
        }
    }
}

impl SelectConfig {
    /// Whether losing focus clears the search text.
    ///
    /// Only single-select controls that clear on select also clear on blur.
    #[must_use]
    pub fn clear_search_on_blur(&self) -> bool {
        self.clear_search_on_select && !self.multiple
    }
}

/// Optional host overrides for label resolution, filtering, and tag creation.
///
/// Unset entries fall back to the crate defaults.
#[derive(Default)]
pub struct OptionFns {
    pub(crate) label: Option<LabelFn>,
    pub(crate) filter_by: Option<FilterByFn>,
    pub(crate) filter: Option<FilterFn>,
    pub(crate) create_option: Option<CreateOptionFn>,
}

// Manual Debug impl since callbacks aren't Debug
impl fmt::Debug for OptionFns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionFns")
            .field("has_label", &self.label.is_some())
            .field("has_filter_by", &self.filter_by.is_some())
            .field("has_filter", &self.filter.is_some())
            .field("has_create_option", &self.create_option.is_some())
            .finish()
    }
}

impl OptionFns {
    /// Creates a table with every entry unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label resolver.
    #[must_use]
    pub fn label<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Choice) -> String + Send + Sync + 'static,
    {
        self.label = Some(Box::new(callback));
        self
    }

    /// Sets the per-option filter predicate.
    #[must_use]
    pub fn filter_by<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Choice, &str, &str) -> bool + Send + Sync + 'static,
    {
        self.filter_by = Some(Box::new(callback));
        self
    }

    /// Sets the whole-list filter.
    #[must_use]
    pub fn filter<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[Choice], &str, &FilterContext<'_>) -> Vec<Choice> + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(callback));
        self
    }

    /// Sets the tag creator.
    #[must_use]
    pub fn create_option<F>(mut self, callback: F) -> Self
    where
        F: Fn(Choice) -> Choice + Send + Sync + 'static,
    {
        self.create_option = Some(Box::new(callback));
        self
    }

    /// Returns the label resolver, if set.
    #[must_use]
    pub fn label_fn(&self) -> Option<&LabelFn> {
        self.label.as_ref()
    }

    /// Returns the per-option filter predicate, if set.
    #[must_use]
    pub fn filter_by_fn(&self) -> Option<&FilterByFn> {
        self.filter_by.as_ref()
    }

    /// Returns the whole-list filter, if set.
    #[must_use]
    pub fn filter_fn(&self) -> Option<&FilterFn> {
        self.filter.as_ref()
    }

    /// Returns the tag creator, if set.
    #[must_use]
    pub fn create_option_fn(&self) -> Option<&CreateOptionFn> {
        self.create_option.as_ref()
    }
}
