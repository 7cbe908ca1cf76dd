// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search filtering of the working options.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::choice::Choice;
use crate::config::{FilterByFn, FilterFn};
use crate::fold::contains_folded;
use crate::label::LabelAccessor;
use crate::matcher::OptionMatcher;

/// Default per-option predicate: folded substring containment of `search` in `label`.
#[must_use]
pub fn default_filter_by(_option: &Choice, label: &str, search: &str) -> bool {
    contains_folded(label, search)
}

/// Default whole-list filter: keeps the options accepted by
/// [`FilterContext::accepts`], in order.
#[must_use]
pub fn default_filter(options: &[Choice], search: &str, ctx: &FilterContext<'_>) -> Vec<Choice> {
    options
        .iter()
        .filter(|option| ctx.accepts(option, &ctx.label(option), search))
        .cloned()
        .collect()
}

/// What a whole-list filter can consult: label resolution and the per-option predicate.
#[derive(Copy, Clone)]
pub struct FilterContext<'a> {
    labels: LabelAccessor<'a>,
    filter_by: Option<&'a FilterByFn>,
}

impl fmt::Debug for FilterContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterContext")
            .field("labels", &self.labels)
            .field("has_filter_by", &self.filter_by.is_some())
            .finish()
    }
}

impl<'a> FilterContext<'a> {
    /// Creates a context using `labels` and the default predicate.
    #[must_use]
    pub const fn new(labels: LabelAccessor<'a>) -> Self {
        Self {
            labels,
            filter_by: None,
        }
    }

    /// Replaces the default predicate when `filter_by` is `Some`.
    #[must_use]
    pub const fn with_filter_by(mut self, filter_by: Option<&'a FilterByFn>) -> Self {
        self.filter_by = filter_by;
        self
    }

    /// Returns the label accessor.
    #[must_use]
    pub const fn labels(&self) -> LabelAccessor<'a> {
        self.labels
    }

    /// Returns the label of `option`.
    #[must_use]
    pub fn label<'o>(&self, option: &'o Choice) -> Cow<'o, str> {
        self.labels.label(option)
    }

    /// Runs the per-option predicate.
    #[must_use]
    pub fn accepts(&self, option: &Choice, label: &str, search: &str) -> bool {
        match self.filter_by {
            Some(filter_by) => filter_by(option, label, search),
            None => default_filter_by(option, label, search),
        }
    }
}

/// Computes the visible subset of the working options for a search string.
///
/// ```rust
/// use understory_select::{Choice, FilterContext, FilterEngine, LabelAccessor};
///
/// let options: Vec<Choice> = ["a", "b"].into_iter().map(Choice::from).collect();
/// let engine = FilterEngine::new(FilterContext::new(LabelAccessor::new("label")))
///     .filterable(false)
///     .taggable(true);
///
/// let visible = engine.visible_options(&options, "c");
/// assert_eq!(visible, vec![Choice::from("c"), Choice::from("a"), Choice::from("b")]);
/// ```
#[derive(Copy, Clone)]
pub struct FilterEngine<'a> {
    ctx: FilterContext<'a>,
    filter: Option<&'a FilterFn>,
    filterable: bool,
    taggable: bool,
}

impl fmt::Debug for FilterEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEngine")
            .field("ctx", &self.ctx)
            .field("has_filter", &self.filter.is_some())
            .field("filterable", &self.filterable)
            .field("taggable", &self.taggable)
            .finish()
    }
}

impl<'a> FilterEngine<'a> {
    /// Creates a filtering, non-tagging engine with the default whole-list filter.
    #[must_use]
    pub const fn new(ctx: FilterContext<'a>) -> Self {
        Self {
            ctx,
            filter: None,
            filterable: true,
            taggable: false,
        }
    }

    /// Replaces the default whole-list filter when `filter` is `Some`.
    #[must_use]
    pub const fn with_filter(mut self, filter: Option<&'a FilterFn>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets whether search text narrows the options.
    #[must_use]
    pub const fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Sets whether unmatched search text is offered as a new option.
    #[must_use]
    pub const fn taggable(mut self, taggable: bool) -> Self {
        self.taggable = taggable;
        self
    }

    /// Returns the options visible for `search`.
    ///
    /// - Empty search, or neither filterable nor taggable: all options, unchanged.
    /// - Filterable with non-empty search: the options kept by the whole-list filter.
    /// - Taggable with non-empty search that matches no option: the search
    ///   text is prepended as a candidate.
    #[must_use]
    pub fn visible_options(&self, options: &[Choice], search: &str) -> Vec<Choice> {
        if search.is_empty() || (!self.filterable && !self.taggable) {
            return options.to_vec();
        }

        let mut visible = if self.filterable {
            match self.filter {
                Some(filter) => filter(options, search, &self.ctx),
                None => default_filter(options, search, &self.ctx),
            }
        } else {
            options.to_vec()
        };

        if self.taggable {
            let candidate = Choice::text(search);
            if !OptionMatcher::new(self.ctx.labels().key()).contains(options, &candidate) {
                visible.insert(0, candidate);
            }
        }
        visible
    }
}
