// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `white-space-collapse` phase-1 whitespace conversion.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::style::WhiteSpaceCollapse;

/// The ASCII whitespace class used by CSS white-space processing.
pub(crate) fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Converts newlines and tabs to spaces according to `white-space-collapse`.
///
/// See: <https://drafts.csswg.org/css-text-4/#white-space-phase-1>
///
/// The output always has the same length in code units as the input: every
/// converted character is replaced by U+0020 in place, never inserted or
/// removed. Downstream fragment bookkeeping indexes into this output with
/// offsets computed against the pre-conversion text, so this invariant is
/// load-bearing.
pub fn normalize_whitespace(text: &str, collapse: WhiteSpaceCollapse) -> Cow<'_, str> {
    // No whitespace at all means nothing to convert; skip the allocation.
    if text.is_empty() || !text.chars().any(is_ascii_space) {
        return Cow::Borrowed(text);
    }

    let (convert_newlines, convert_tabs) = match collapse {
        // Segment breaks are collapsible and transform to spaces; so do tabs.
        WhiteSpaceCollapse::Collapse => (true, true),
        // Segment breaks stay as forced breaks; tabs still become spaces.
        WhiteSpaceCollapse::PreserveBreaks => (false, true),
        WhiteSpaceCollapse::PreserveSpaces => (true, true),
        WhiteSpaceCollapse::Preserve => (false, false),
    };

    if !convert_newlines && !convert_tabs {
        return Cow::Borrowed(text);
    }

    // A lone convertible whitespace character is simply a space.
    if text == " " || (convert_tabs && text == "\t") || (convert_newlines && text == "\n") {
        return Cow::Owned(String::from(" "));
    }

    let converted: String = text
        .chars()
        .map(|c| match c {
            '\n' if convert_newlines => ' ',
            '\t' if convert_tabs => ' ',
            _ => c,
        })
        .collect();
    Cow::Owned(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_converts_newlines_and_tabs() {
        let out = normalize_whitespace("a\tb\nc", WhiteSpaceCollapse::Collapse);
        assert_eq!(out, "a b c");
    }

    #[test]
    fn preserve_breaks_keeps_newlines() {
        let out = normalize_whitespace("a\tb\nc", WhiteSpaceCollapse::PreserveBreaks);
        assert_eq!(out, "a b\nc");
    }

    #[test]
    fn preserve_spaces_converts_both() {
        let out = normalize_whitespace("a\tb\nc", WhiteSpaceCollapse::PreserveSpaces);
        assert_eq!(out, "a b c");
    }

    #[test]
    fn preserve_converts_nothing() {
        let out = normalize_whitespace("a\tb\nc", WhiteSpaceCollapse::Preserve);
        assert!(matches!(out, Cow::Borrowed("a\tb\nc")));
    }

    #[test]
    fn no_whitespace_fast_path_avoids_allocation() {
        let out = normalize_whitespace("日本語abc", WhiteSpaceCollapse::Collapse);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn single_character_fast_path() {
        assert_eq!(normalize_whitespace("\t", WhiteSpaceCollapse::Collapse), " ");
        assert_eq!(normalize_whitespace("\n", WhiteSpaceCollapse::Collapse), " ");
        // Not convertible under preserve-breaks, so the newline survives.
        assert_eq!(
            normalize_whitespace("\n", WhiteSpaceCollapse::PreserveBreaks),
            "\n"
        );
    }

    #[test]
    fn length_in_code_units_is_preserved() {
        let inputs = ["", " ", "a\tb", "line\nbreak", "\t\t\n\n", "日本\t語", "a\r\nb"];
        for input in inputs {
            for mode in [
                WhiteSpaceCollapse::Collapse,
                WhiteSpaceCollapse::PreserveBreaks,
                WhiteSpaceCollapse::PreserveSpaces,
                WhiteSpaceCollapse::Preserve,
            ] {
                let out = normalize_whitespace(input, mode);
                assert_eq!(out.len(), input.len(), "{input:?} under {mode:?}");
            }
        }
    }
}
