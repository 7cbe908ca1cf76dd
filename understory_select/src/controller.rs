// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection state machine and its reconciliation with host props.

use alloc::string::String;
use alloc::vec::Vec;

use crate::builder::SelectBuilder;
use crate::choice::Choice;
use crate::config::{OptionFns, SelectConfig, TextDirection};
use crate::dropdown::{Dropdown, DropdownFlags, FocusRequest, ToggleTarget};
use crate::event::SelectEvent;
use crate::filter::{FilterContext, FilterEngine};
use crate::label::LabelAccessor;
use crate::matcher::OptionMatcher;
use crate::pointer::TypeAhead;
use crate::shape::ValueShape;
use crate::tag::TagCreator;
use crate::value::SelectValue;

/// A batch of host prop changes, applied in dependency order by
/// [`SelectController::apply_props`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropsUpdate {
    /// New external value.
    pub value: Option<SelectValue>,
    /// New external options.
    pub options: Option<Vec<Choice>>,
    /// New multiplicity.
    pub multiple: Option<bool>,
}

/// Headless state for a select/combo-box control.
///
/// The host owns the external value and options. The controller keeps working
/// copies of both, mutates them in response to user gestures, and queues
/// [`SelectEvent::Input`] whenever the working value changes so the host can
/// write the new value back. Host prop changes come in through
/// [`value_changed`](Self::value_changed),
/// [`options_changed`](Self::options_changed), and
/// [`multiplicity_changed`](Self::multiplicity_changed).
///
/// The working value is always [`SelectValue::Multiple`] in multi-select
/// mode and [`SelectValue::Single`] otherwise.
#[derive(Debug)]
pub struct SelectController {
    config: SelectConfig,
    fns: OptionFns,
    value: SelectValue,
    options: Vec<Choice>,
    working_value: SelectValue,
    working_options: Vec<Choice>,
    search: String,
    dropdown: Dropdown,
    loading: bool,
    pointer: TypeAhead,
    events: Vec<SelectEvent>,
    revision: u64,
}

impl SelectController {
    /// Creates a controller from a configuration, the external options, and the external value.
    #[must_use]
    pub fn new(config: SelectConfig, options: Vec<Choice>, value: SelectValue) -> Self {
        Self::from_parts(config, OptionFns::default(), options, value, false)
    }

    /// Starts a [`SelectBuilder`].
    #[must_use]
    pub fn builder() -> SelectBuilder {
        SelectBuilder::new()
    }

    pub(crate) fn from_parts(
        config: SelectConfig,
        fns: OptionFns,
        options: Vec<Choice>,
        value: SelectValue,
        loading: bool,
    ) -> Self {
        let working_value =
            ValueShape::new(config.value_key.as_deref()).to_internal(&value, &options, config.multiple);
        let working_options = options.clone();
        Self {
            config,
            fns,
            value,
            options,
            working_value,
            working_options,
            search: String::new(),
            dropdown: Dropdown::new(),
            loading,
            pointer: TypeAhead::new(),
            events: Vec::new(),
            revision: 0,
        }
    }

    // --- accessors ---

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Returns the host overrides.
    #[must_use]
    pub fn fns(&self) -> &OptionFns {
        &self.fns
    }

    /// Returns the last external value seen.
    #[must_use]
    pub fn value(&self) -> &SelectValue {
        &self.value
    }

    /// Returns the last external options seen.
    #[must_use]
    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    /// Returns the working value.
    #[must_use]
    pub fn working_value(&self) -> &SelectValue {
        &self.working_value
    }

    /// Returns the working options, including pushed tags.
    #[must_use]
    pub fn working_options(&self) -> &[Choice] {
        &self.working_options
    }

    /// Returns the selected options as a slice, whatever the multiplicity.
    #[must_use]
    pub fn selected(&self) -> &[Choice] {
        self.working_value.as_slice()
    }

    /// Returns the search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns whether options are being loaded.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the highlighted index into [`visible_options`](Self::visible_options).
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer.index()
    }

    /// Returns a counter bumped whenever the working value changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the queued notifications without draining them.
    #[must_use]
    pub fn events(&self) -> &[SelectEvent] {
        &self.events
    }

    /// Drains the queued notifications in emission order.
    pub fn take_events(&mut self) -> Vec<SelectEvent> {
        core::mem::take(&mut self.events)
    }

    fn labels(&self) -> LabelAccessor<'_> {
        LabelAccessor::new(&self.config.label_key).with_custom(self.fns.label_fn())
    }

    fn matcher(&self) -> OptionMatcher<'_> {
        OptionMatcher::new(&self.config.label_key)
    }

    fn shape(&self) -> ValueShape<'_> {
        ValueShape::new(self.config.value_key.as_deref())
    }

    // --- selection ---

    /// Returns `true` if `option` is selected.
    ///
    /// Single-select compares by equality. Multi-select accepts any entry
    /// matching under [`same_option`](crate::same_option).
    #[must_use]
    pub fn is_selected(&self, option: &Choice) -> bool {
        match &self.working_value {
            SelectValue::Single(current) => current.as_ref() == Some(option),
            SelectValue::Multiple(current) => self.matcher().contains(current, option),
        }
    }

    /// Returns `true` if a working option matches `option`.
    #[must_use]
    pub fn option_exists(&self, option: &Choice) -> bool {
        self.matcher().contains(&self.working_options, option)
    }

    /// Selects `option`.
    ///
    /// Already-selected options leave the value alone. In tag mode an option
    /// not among the working options is first turned into a new option.
    /// Multi-select appends; single-select replaces. Afterwards the dropdown
    /// is toggled and the search cleared, as configured.
    pub fn select(&mut self, option: impl Into<Choice>) {
        let option = option.into();
        if !self.is_selected(&option) {
            let option = if self.config.taggable && !self.option_exists(&option) {
                self.create_tag(option)
            } else {
                option
            };
            let next = match &self.working_value {
                SelectValue::Multiple(current) => {
                    let mut next = current.clone();
                    next.push(option);
                    SelectValue::Multiple(next)
                }
                SelectValue::Single(_) => SelectValue::Single(Some(option)),
            };
            self.replace_working_value(next);
        }
        self.after_select();
    }

    /// Deselects `option`.
    ///
    /// Single-select clears the value unconditionally. Multi-select removes
    /// the first matching entry, or does nothing without a match.
    pub fn deselect(&mut self, option: &Choice) {
        let next = match &self.working_value {
            SelectValue::Single(_) => SelectValue::Single(None),
            SelectValue::Multiple(current) => {
                let Some(idx) = self.matcher().position_in(current, option) else {
                    return;
                };
                let mut next = current.clone();
                next.remove(idx);
                SelectValue::Multiple(next)
            }
        };
        self.replace_working_value(next);
    }

    /// Clears the value, whether or not the control is clearable.
    pub fn clear(&mut self) {
        self.replace_working_value(SelectValue::empty(self.config.multiple));
    }

    /// Removes the last selection when the search text is empty.
    ///
    /// This is the usual mapping for backspace. Returns the removed option.
    pub fn maybe_delete_value(&mut self) -> Option<Choice> {
        if !self.search.is_empty() {
            return None;
        }
        match &self.working_value {
            SelectValue::Multiple(current) if !current.is_empty() => {
                let mut next = current.clone();
                let removed = next.pop();
                self.replace_working_value(SelectValue::Multiple(next));
                removed
            }
            SelectValue::Single(Some(current)) => {
                let removed = current.clone();
                self.replace_working_value(SelectValue::Single(None));
                Some(removed)
            }
            _ => None,
        }
    }

    fn create_tag(&mut self, raw: Choice) -> Choice {
        let created = TagCreator::new(&self.config.label_key)
            .with_custom(self.fns.create_option_fn())
            .create(raw, &self.working_options);
        self.events.push(SelectEvent::OptionCreated(created.clone()));
        if self.config.push_tags {
            self.working_options.push(created.clone());
            self.pointer.reset();
        }
        created
    }

    fn after_select(&mut self) {
        if self.config.close_on_select {
            self.dropdown.flip();
            self.events.push(SelectEvent::RequestBlur);
        }
        if self.config.clear_search_on_select {
            self.set_search(String::new());
        }
    }

    /// Installs `next` as the working value and notifies the host.
    ///
    /// Multi-select always notifies; single-select only on an actual change.
    fn replace_working_value(&mut self, next: SelectValue) {
        debug_assert_eq!(
            next.is_multiple(),
            self.config.multiple,
            "working value shape must follow multiplicity"
        );
        let changed = self.working_value != next;
        self.working_value = next;
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        if changed || self.config.multiple {
            let external = self.shape().to_external(&self.working_value);
            self.events.push(SelectEvent::Input(external));
        }
    }

    // --- reconciliation ---

    /// Reconciles a new external value.
    ///
    /// Nothing happens unless the value differs from the previous external
    /// value. Otherwise the working value is rebuilt from it through the
    /// value shape.
    pub fn value_changed(&mut self, value: SelectValue) {
        if value == self.value {
            tracing::trace!("external value unchanged");
            return;
        }
        self.value = value;
        let next = self
            .shape()
            .to_internal(&self.value, &self.options, self.config.multiple);
        self.replace_working_value(next);
    }

    /// Reconciles new external options.
    ///
    /// The working options are replaced, dropping pushed tags. The working
    /// value is then cleared (with `reset_on_options_change`, outside tag
    /// mode) or rebuilt from the current external value against the new options.
    pub fn options_changed(&mut self, options: Vec<Choice>) {
        self.options = options;
        self.working_options = self.options.clone();
        self.pointer.reset();

        let reset = !self.config.taggable && self.config.reset_on_options_change;
        tracing::debug!(count = self.options.len(), reset, "external options replaced");
        let next = if reset {
            SelectValue::empty(self.config.multiple)
        } else {
            self.shape()
                .to_internal(&self.value, &self.options, self.config.multiple)
        };
        self.replace_working_value(next);
    }

    /// Switches multiplicity, always resetting the working value.
    pub fn multiplicity_changed(&mut self, multiple: bool) {
        tracing::debug!(multiple, "multiplicity changed");
        self.config.multiple = multiple;
        self.replace_working_value(SelectValue::empty(multiple));
    }

    /// Applies a batch of prop changes: value, then options, then multiplicity.
    ///
    /// Multiplicity is only reconciled when it actually differs.
    pub fn apply_props(&mut self, update: PropsUpdate) {
        if let Some(value) = update.value {
            self.value_changed(value);
        }
        if let Some(options) = update.options {
            self.options_changed(options);
        }
        if let Some(multiple) = update.multiple
            && multiple != self.config.multiple
        {
            self.multiplicity_changed(multiple);
        }
    }

    /// Replaces the configuration.
    ///
    /// A change of `multiple` goes through
    /// [`multiplicity_changed`](Self::multiplicity_changed).
    pub fn set_config(&mut self, config: SelectConfig) {
        let multiple = config.multiple;
        self.config = SelectConfig {
            multiple: self.config.multiple,
            ..config
        };
        if multiple != self.config.multiple {
            self.multiplicity_changed(multiple);
        }
    }

    // --- search ---

    /// Sets the search text, queueing [`SelectEvent::Search`] when it changes.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search {
            return;
        }
        self.search = text;
        self.pointer.reset();
        self.events.push(SelectEvent::Search(self.search.clone()));
    }

    /// Returns `true` when the search input holds text.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Returns the options to show for the current search text.
    #[must_use]
    pub fn visible_options(&self) -> Vec<Choice> {
        let ctx = FilterContext::new(self.labels()).with_filter_by(self.fns.filter_by_fn());
        FilterEngine::new(ctx)
            .with_filter(self.fns.filter_fn())
            .filterable(self.config.filterable)
            .taggable(self.config.taggable)
            .visible_options(&self.working_options, &self.search)
    }

    /// Returns the label of `option` under the current configuration.
    #[must_use]
    pub fn label_of<'o>(&self, option: &'o Choice) -> alloc::borrow::Cow<'o, str> {
        self.labels().label(option)
    }

    // --- focus and visibility ---

    /// Returns whether the dropdown is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dropdown.is_open(self.config.no_drop, self.loading)
    }

    /// Handles a click on part of the control.
    ///
    /// Gestures from unrelated targets are ignored. Opening queues
    /// [`SelectEvent::RequestFocus`]; closing queues
    /// [`SelectEvent::RequestBlur`] and waits for [`on_search_blur`](Self::on_search_blur).
    pub fn toggle_dropdown(&mut self, target: ToggleTarget) {
        match self.dropdown.toggle(target, self.config.disabled) {
            Some(FocusRequest::Focus) => self.events.push(SelectEvent::RequestFocus),
            Some(FocusRequest::Blur) => self.events.push(SelectEvent::RequestBlur),
            None => {}
        }
    }

    /// The search input gained focus: open the dropdown.
    pub fn on_search_focus(&mut self) {
        self.dropdown.open();
        self.events.push(SelectEvent::SearchFocus);
    }

    /// The search input lost focus: close the dropdown.
    pub fn on_search_blur(&mut self) {
        if self.config.clear_search_on_blur() {
            self.set_search(String::new());
        }
        self.dropdown.close();
        self.events.push(SelectEvent::SearchBlur);
    }

    /// Escape: clear the search text if there is any, otherwise ask for a blur.
    pub fn on_escape(&mut self) {
        if self.search.is_empty() {
            self.events.push(SelectEvent::RequestBlur);
        } else {
            self.set_search(String::new());
        }
    }

    // --- keyboard highlight ---

    /// Moves the highlight up.
    pub fn type_ahead_up(&mut self) {
        self.pointer.up();
    }

    /// Moves the highlight down.
    pub fn type_ahead_down(&mut self) {
        let len = self.visible_options().len();
        self.pointer.down(len);
    }

    /// Selects the highlighted option.
    ///
    /// Without one, tag mode selects the search text instead.
    pub fn type_ahead_select(&mut self) {
        let highlighted = self.visible_options().into_iter().nth(self.pointer.index());
        if let Some(option) = highlighted {
            self.select(option);
        } else if self.config.taggable && !self.search.is_empty() {
            let text = Choice::text(self.search.clone());
            self.select(text);
        }
        if self.config.clear_search_on_select {
            self.set_search(String::new());
        }
    }

    // --- loading ---

    /// Sets the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Sets the loading flag to `toggle`, or flips it when `None`. Returns the new state.
    pub fn toggle_loading(&mut self, toggle: Option<bool>) -> bool {
        self.loading = toggle.unwrap_or(!self.loading);
        self.loading
    }

    // --- derived state ---

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_value_empty(&self) -> bool {
        self.working_value.is_empty()
    }

    /// Returns `true` when a clear affordance should be shown.
    ///
    /// Only single-select, clearable controls with a value and a closed
    /// dropdown show one.
    #[must_use]
    pub fn show_clear_button(&self) -> bool {
        !self.config.multiple
            && self.config.clearable
            && !self.dropdown.is_requested_open()
            && matches!(self.working_value, SelectValue::Single(Some(_)))
    }

    /// Returns the placeholder while the value is empty.
    #[must_use]
    pub fn search_placeholder(&self) -> Option<&str> {
        (self.is_value_empty() && !self.config.placeholder.is_empty())
            .then_some(self.config.placeholder.as_str())
    }

    /// Returns the state flags for rendering.
    #[must_use]
    pub fn dropdown_flags(&self) -> DropdownFlags {
        let mut flags = DropdownFlags::empty();
        flags.set(DropdownFlags::OPEN, self.is_open());
        flags.set(DropdownFlags::SINGLE, !self.config.multiple);
        flags.set(DropdownFlags::SEARCHING, self.is_searching());
        flags.set(DropdownFlags::SEARCHABLE, self.config.searchable);
        flags.set(DropdownFlags::UNSEARCHABLE, !self.config.searchable);
        flags.set(DropdownFlags::LOADING, self.loading);
        flags.set(DropdownFlags::RTL, self.config.dir == TextDirection::Rtl);
        flags.set(DropdownFlags::DISABLED, self.config.disabled);
        flags
    }
}
