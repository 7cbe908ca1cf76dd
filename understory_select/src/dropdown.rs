// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown visibility.

/// Where a toggle gesture originated.
///
/// Only the control's own focus targets toggle the dropdown; gestures bubbling
/// up from unrelated children (for example a selected tag's remove button) are
/// ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToggleTarget {
    /// The open/close indicator.
    OpenIndicator,
    /// The search input.
    SearchInput,
    /// The toggle area around the selected value.
    Toggle,
    /// The control's root element.
    Root,
    /// Anything else.
    Other,
}

impl ToggleTarget {
    /// Returns `true` for targets that may toggle the dropdown.
    #[must_use]
    pub const fn toggles(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A focus change the host should apply to the search input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusRequest {
    /// Move focus into the search input.
    Focus,
    /// Remove focus from the search input; the host's blur handling then closes the dropdown.
    Blur,
}

/// Open/closed state of the dropdown.
///
/// Opening happens here directly, but closing is expected to go through the
/// search input's blur so focus and visibility stay consistent: when open,
/// [`Dropdown::toggle`] only asks for a blur.
///
/// ```rust
/// use understory_select::{Dropdown, FocusRequest, ToggleTarget};
///
/// let mut dropdown = Dropdown::new();
/// assert_eq!(dropdown.toggle(ToggleTarget::Root, false), Some(FocusRequest::Focus));
/// assert!(dropdown.is_open(false, false));
///
/// // Closing waits for the blur.
/// assert_eq!(dropdown.toggle(ToggleTarget::Root, false), Some(FocusRequest::Blur));
/// assert!(dropdown.is_open(false, false));
/// dropdown.close();
/// assert!(!dropdown.is_open(false, false));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    /// Creates a closed dropdown.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns the requested open state, ignoring `no_drop` and loading.
    #[must_use]
    pub const fn is_requested_open(&self) -> bool {
        self.open
    }

    /// Returns whether the dropdown is shown.
    ///
    /// It is forced closed by `no_drop` and while loading.
    #[must_use]
    pub const fn is_open(&self, no_drop: bool, loading: bool) -> bool {
        self.open && !no_drop && !loading
    }

    /// Opens the dropdown.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dropdown.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips the open state.
    pub fn flip(&mut self) {
        self.open = !self.open;
    }

    /// Handles a toggle gesture from `target`.
    ///
    /// Returns the focus change the host should apply, or `None` when the
    /// gesture is ignored (unrelated target, or a disabled control that is closed).
    pub fn toggle(&mut self, target: ToggleTarget, disabled: bool) -> Option<FocusRequest> {
        if !target.toggles() {
            return None;
        }
        if self.open {
            Some(FocusRequest::Blur)
        } else if disabled {
            None
        } else {
            self.open = true;
            Some(FocusRequest::Focus)
        }
    }
}

bitflags::bitflags! {
    /// State flags a renderer can map to classes or styles.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DropdownFlags: u8 {
        /// The dropdown is shown.
        const OPEN         = 0b0000_0001;
        /// The control is single-select.
        const SINGLE       = 0b0000_0010;
        /// The search input holds text.
        const SEARCHING    = 0b0000_0100;
        /// The search input accepts text.
        const SEARCHABLE   = 0b0000_1000;
        /// The search input does not accept text.
        const UNSEARCHABLE = 0b0001_0000;
        /// Options are being loaded.
        const LOADING      = 0b0010_0000;
        /// The control is laid out right to left.
        const RTL          = 0b0100_0000;
        /// The control is disabled.
        const DISABLED     = 0b1000_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrelated_targets_are_ignored() {
        let mut dropdown = Dropdown::new();
        assert_eq!(dropdown.toggle(ToggleTarget::Other, false), None);
        assert!(!dropdown.is_requested_open());
    }

    #[test]
    fn every_focus_target_opens() {
        for target in [
            ToggleTarget::OpenIndicator,
            ToggleTarget::SearchInput,
            ToggleTarget::Toggle,
            ToggleTarget::Root,
        ] {
            let mut dropdown = Dropdown::new();
            assert_eq!(dropdown.toggle(target, false), Some(FocusRequest::Focus));
            assert!(dropdown.is_requested_open());
        }
    }

    #[test]
    fn disabled_does_not_open() {
        let mut dropdown = Dropdown::new();
        assert_eq!(dropdown.toggle(ToggleTarget::Root, true), None);
        assert!(!dropdown.is_requested_open());
    }

    #[test]
    fn disabled_still_asks_to_blur_when_open() {
        let mut dropdown = Dropdown::new();
        dropdown.open();
        assert_eq!(
            dropdown.toggle(ToggleTarget::Root, true),
            Some(FocusRequest::Blur)
        );
    }

    #[test]
    fn no_drop_and_loading_force_closed() {
        let mut dropdown = Dropdown::new();
        dropdown.open();
        assert!(dropdown.is_open(false, false));
        assert!(!dropdown.is_open(true, false));
        assert!(!dropdown.is_open(false, true));
    }
}
