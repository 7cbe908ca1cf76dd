// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications from the controller to its host.

use alloc::string::String;

use crate::choice::Choice;
use crate::value::SelectValue;

/// A notification queued by [`SelectController`](crate::SelectController).
///
/// Events are queued after the state change they describe has been applied,
/// in the order the changes happened. Drain them with
/// [`SelectController::take_events`](crate::SelectController::take_events).
#[derive(Clone, Debug, PartialEq)]
pub enum SelectEvent {
    /// The working value changed. Carries the value in the host's shape
    /// (identifiers when a value key is configured).
    Input(SelectValue),
    /// A tag option was created from search text.
    OptionCreated(Choice),
    /// The search text changed.
    Search(String),
    /// The search input gained focus.
    SearchFocus,
    /// The search input lost focus.
    SearchBlur,
    /// The host should focus the search input.
    RequestFocus,
    /// The host should blur the search input.
    RequestBlur,
}
