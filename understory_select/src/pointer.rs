// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard highlight within the visible options.

/// Index of the highlighted visible option.
///
/// The index is not clamped when the visible list shrinks; callers reset it
/// whenever the visible options change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeAhead {
    index: usize,
}

impl TypeAhead {
    /// Creates a pointer at the first option.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns the highlighted index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Moves the highlight up one option; stops at the first.
    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Moves the highlight down one option; stops at the last of `len`.
    pub fn down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Moves the highlight back to the first option.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut pointer = TypeAhead::new();
        pointer.up();
        assert_eq!(pointer.index(), 0);

        pointer.down(3);
        pointer.down(3);
        pointer.down(3);
        assert_eq!(pointer.index(), 2);

        pointer.up();
        assert_eq!(pointer.index(), 1);

        pointer.reset();
        assert_eq!(pointer.index(), 0);
    }

    #[test]
    fn empty_list_keeps_zero() {
        let mut pointer = TypeAhead::new();
        pointer.down(0);
        assert_eq!(pointer.index(), 0);
    }
}
