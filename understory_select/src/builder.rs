// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chained construction of a [`SelectController`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::choice::Choice;
use crate::config::{OptionFns, SelectConfig, TextDirection};
use crate::controller::SelectController;
use crate::filter::FilterContext;
use crate::value::SelectValue;

/// Builder for [`SelectController`].
///
/// # Example
///
/// ```rust
/// use understory_select::{Choice, Record, SelectController, SelectValue};
///
/// let controller = SelectController::builder()
///     .multiple(true)
///     .value_key("id")
///     .options([
///         Record::new().with("id", 1).with("label", "One"),
///         Record::new().with("id", 2).with("label", "Two"),
///     ])
///     .value(SelectValue::Multiple(vec![Choice::from(2)]))
///     .build();
///
/// assert_eq!(controller.selected().len(), 1);
/// assert_eq!(controller.label_of(&controller.selected()[0]), "Two");
/// ```
#[derive(Default)]
pub struct SelectBuilder {
    config: SelectConfig,
    fns: OptionFns,
    options: Vec<Choice>,
    value: Option<SelectValue>,
    loading: bool,
}

// Manual Debug impl since callbacks aren't Debug
impl fmt::Debug for SelectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectBuilder")
            .field("config", &self.config)
            .field("fns", &self.fns)
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("loading", &self.loading)
            .finish()
    }
}

impl SelectBuilder {
    /// Creates a builder with the default configuration and no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets whether the value is a list.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.multiple = multiple;
        self
    }

    /// Sets whether a clear affordance is shown.
    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.config.clearable = clearable;
        self
    }

    /// Sets whether the search input accepts text.
    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    /// Sets whether search text filters the options.
    #[must_use]
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.config.filterable = filterable;
        self
    }

    /// Sets whether search text can become a new option.
    #[must_use]
    pub fn taggable(mut self, taggable: bool) -> Self {
        self.config.taggable = taggable;
        self
    }

    /// Sets whether created options join the working options.
    #[must_use]
    pub fn push_tags(mut self, push_tags: bool) -> Self {
        self.config.push_tags = push_tags;
        self
    }

    /// Sets whether a selection closes the dropdown.
    #[must_use]
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.config.close_on_select = close_on_select;
        self
    }

    /// Sets whether a selection clears the search text.
    #[must_use]
    pub fn clear_search_on_select(mut self, clear: bool) -> Self {
        self.config.clear_search_on_select = clear;
        self
    }

    /// Sets whether replacing the options clears the value.
    #[must_use]
    pub fn reset_on_options_change(mut self, reset: bool) -> Self {
        self.config.reset_on_options_change = reset;
        self
    }

    /// Keeps the dropdown closed.
    #[must_use]
    pub fn no_drop(mut self, no_drop: bool) -> Self {
        self.config.no_drop = no_drop;
        self
    }

    /// Disables the control.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Sets the label field of record options.
    #[must_use]
    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.config.label_key = key.into();
        self
    }

    /// Exchanges only this field of record options with the host.
    #[must_use]
    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.config.value_key = Some(key.into());
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Sets the writing direction.
    #[must_use]
    pub fn dir(mut self, dir: TextDirection) -> Self {
        self.config.dir = dir;
        self
    }

    /// Sets the external options.
    #[must_use]
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Choice>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the external value. Defaults to empty.
    #[must_use]
    pub fn value(mut self, value: impl Into<SelectValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Starts in the loading state.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Replaces all host overrides.
    #[must_use]
    pub fn fns(mut self, fns: OptionFns) -> Self {
        self.fns = fns;
        self
    }

    /// Resolves labels with `callback` instead of the label key.
    #[must_use]
    pub fn label_with<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Choice) -> String + Send + Sync + 'static,
    {
        self.fns = self.fns.label(callback);
        self
    }

    /// Matches single options against the search text with `callback`.
    #[must_use]
    pub fn filter_by<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Choice, &str, &str) -> bool + Send + Sync + 'static,
    {
        self.fns = self.fns.filter_by(callback);
        self
    }

    /// Filters the whole option list with `callback`.
    #[must_use]
    pub fn filter_with<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[Choice], &str, &FilterContext<'_>) -> Vec<Choice> + Send + Sync + 'static,
    {
        self.fns = self.fns.filter(callback);
        self
    }

    /// Builds tag options with `callback`.
    #[must_use]
    pub fn create_option_with<F>(mut self, callback: F) -> Self
    where
        F: Fn(Choice) -> Choice + Send + Sync + 'static,
    {
        self.fns = self.fns.create_option(callback);
        self
    }

    /// Builds the controller.
    #[must_use]
    pub fn build(self) -> SelectController {
        let value = self
            .value
            .unwrap_or_else(|| SelectValue::empty(self.config.multiple));
        SelectController::from_parts(self.config, self.fns, self.options, value, self.loading)
    }
}
