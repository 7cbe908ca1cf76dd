// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case and diacritic folding for search comparisons.

use alloc::string::String;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds `text` for loose comparison.
///
/// The text is decomposed (NFD), combining marks are dropped, letters without
/// a decomposition are spelled out in ASCII, and the result is lowercased.
///
/// ```rust
/// use understory_select::fold;
///
/// assert_eq!(fold("Crème Brûlée"), "creme brulee");
/// assert_eq!(fold("Straße"), "strasse");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match spell_out(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Returns `true` if folded `needle` occurs within folded `haystack`.
///
/// An empty needle is contained in every haystack.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(fold(needle).as_str())
}

/// Letters that NFD leaves intact.
fn spell_out(c: char) -> Option<&'static str> {
    let ascii = match c {
        '\u{00DF}' | '\u{1E9E}' => "ss",
        '\u{00C6}' | '\u{00E6}' => "ae",
        '\u{0152}' | '\u{0153}' => "oe",
        '\u{00D8}' | '\u{00F8}' => "o",
        '\u{0141}' | '\u{0142}' => "l",
        '\u{0110}' | '\u{0111}' => "d",
        '\u{00DE}' | '\u{00FE}' => "th",
        '\u{0131}' => "i",
        _ => return None,
    };
    Some(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(fold("\u{00C9}cole"), "ecole");
        assert_eq!(fold("NA\u{00CF}VE"), "naive");
        assert_eq!(fold("plain"), "plain");
    }

    #[test]
    fn spells_out_undecomposable_letters() {
        assert_eq!(fold("\u{00D8}resund"), "oresund");
        assert_eq!(fold("\u{0141}\u{00F3}d\u{017A}"), "lodz");
        assert_eq!(fold("\u{00C6}sir"), "aesir");
    }

    #[test]
    fn contains_is_loose_both_ways() {
        assert!(contains_folded("Pok\u{00E9}mon", "POKE"));
        assert!(contains_folded("pokemon", "Pok\u{00E9}"));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("abc", "abd"));
    }
}
