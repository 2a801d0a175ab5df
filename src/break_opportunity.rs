// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `word-break`-aware soft wrap decisions.

use icu_properties::props::LineBreak;
use icu_properties::CodePointMapData;

use crate::segment::LineSegmenter;
use crate::style::WordBreak;

/// Decides whether a soft wrap opportunity exists at a grapheme boundary.
///
/// `normal` and `break-word` defer entirely to the UAX #14 segmenter.
/// `break-all` additionally allows breaks between letter/number/ideograph
/// pairs (treating them all as ideographic for breaking purposes), and
/// `keep-all` suppresses segmenter breaks between such pairs.
#[derive(Clone, Debug)]
pub struct BreakOpportunityOracle<'a> {
    text: &'a str,
    lines: &'a LineSegmenter,
    word_break: WordBreak,
    wrap_enabled: bool,
}

impl<'a> BreakOpportunityOracle<'a> {
    /// Creates an oracle over `text`, whose line boundaries are in `lines`.
    pub fn new(
        text: &'a str,
        lines: &'a LineSegmenter,
        word_break: WordBreak,
        wrap_enabled: bool,
    ) -> Self {
        Self {
            text,
            lines,
            word_break,
            wrap_enabled,
        }
    }

    /// Whether the line may wrap immediately before `index`.
    ///
    /// `index` must lie on a grapheme-cluster boundary of the text.
    pub fn is_at_line_break_opportunity(&self, index: usize) -> bool {
        if !self.wrap_enabled {
            return false;
        }
        match self.word_break {
            WordBreak::Normal | WordBreak::BreakWord => self.lines.is_boundary(index),
            WordBreak::BreakAll => {
                self.lines.is_boundary(index) || self.breaks_within_words(index)
            }
            WordBreak::KeepAll => {
                !self.keeps_together(index) && self.lines.is_boundary(index)
            }
        }
    }

    /// `break-all`: a break is allowed between two adjacent code points that
    /// would customarily stay joined, as if both were ideographic.
    fn breaks_within_words(&self, index: usize) -> bool {
        self.surrounding_classes(index).is_some_and(|(previous, next)| {
            treat_as_ideographic(previous) && treat_as_ideographic(next)
        })
    }

    /// `keep-all`: a segmenter-granted break between two letter/number code
    /// points is suppressed.
    fn keeps_together(&self, index: usize) -> bool {
        self.surrounding_classes(index).is_some_and(|(previous, next)| {
            keep_all_class(previous) && keep_all_class(next)
        })
    }

    /// Line-break classes of the code points on either side of `index`,
    /// skipping combining marks when looking backwards. `None` past the end
    /// of the text or when no previous code point exists (a leading combining
    /// mark sequence has no base to join with, so no special break applies).
    fn surrounding_classes(&self, index: usize) -> Option<(LineBreak, LineBreak)> {
        if index >= self.text.len() {
            return None;
        }
        let classes = CodePointMapData::<LineBreak>::new();
        let next = classes.get(self.text[index..].chars().next()?);
        let previous = self.text[..index]
            .chars()
            .rev()
            .map(|c| classes.get(c))
            .find(|&class| class != LineBreak::CombiningMark)?;
        Some((previous, next))
    }
}

fn treat_as_ideographic(class: LineBreak) -> bool {
    matches!(
        class,
        LineBreak::Alphabetic | LineBreak::Numeric | LineBreak::ComplexContext | LineBreak::Ideographic
    )
}

fn keep_all_class(class: LineBreak) -> bool {
    matches!(
        class,
        LineBreak::Alphabetic | LineBreak::Numeric | LineBreak::Ambiguous | LineBreak::Ideographic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle_for(text: &str, lines: &LineSegmenter, word_break: WordBreak) -> Vec<usize> {
        let oracle = BreakOpportunityOracle::new(text, lines, word_break, true);
        text.char_indices()
            .map(|(i, _)| i)
            .chain([text.len()])
            .filter(|&i| oracle.is_at_line_break_opportunity(i))
            .collect()
    }

    #[test]
    fn disabled_wrapping_never_breaks() {
        let lines = LineSegmenter::new("foo bar");
        let oracle = BreakOpportunityOracle::new("foo bar", &lines, WordBreak::Normal, false);
        assert!((0..="foo bar".len()).all(|i| !oracle.is_at_line_break_opportunity(i)));
    }

    #[test]
    fn normal_defers_to_the_segmenter() {
        let text = "foo bar";
        let lines = LineSegmenter::new(text);
        assert_eq!(oracle_for(text, &lines, WordBreak::Normal), vec![4, 7]);
        assert_eq!(oracle_for(text, &lines, WordBreak::BreakWord), vec![4, 7]);
    }

    #[test]
    fn break_all_breaks_between_letters() {
        let text = "abc";
        let lines = LineSegmenter::new(text);
        assert_eq!(oracle_for(text, &lines, WordBreak::Normal), vec![3]);
        assert_eq!(oracle_for(text, &lines, WordBreak::BreakAll), vec![1, 2, 3]);
    }

    #[test]
    fn break_all_skips_combining_marks_looking_back() {
        // a + combining acute, then b: the "previous code point" for the
        // position before 'b' is 'a', not the mark.
        let text = "a\u{0301}b";
        let lines = LineSegmenter::new(text);
        let oracle = BreakOpportunityOracle::new(text, &lines, WordBreak::BreakAll, true);
        assert!(oracle.is_at_line_break_opportunity(3));
    }

    #[test]
    fn break_all_with_leading_combining_mark_is_conservative() {
        let text = "\u{0301}b";
        let lines = LineSegmenter::new(text);
        let oracle = BreakOpportunityOracle::new(text, &lines, WordBreak::BreakAll, true);
        assert!(!oracle.is_at_line_break_opportunity(2));
    }

    #[test]
    fn keep_all_suppresses_cjk_breaks() {
        let text = "日本語";
        let lines = LineSegmenter::new(text);
        assert_eq!(oracle_for(text, &lines, WordBreak::Normal), vec![3, 6, 9]);
        // Interior breaks are suppressed; the end of text remains.
        assert_eq!(oracle_for(text, &lines, WordBreak::KeepAll), vec![9]);
    }

    #[test]
    fn keep_all_still_breaks_after_spaces() {
        let text = "foo 日本";
        let lines = LineSegmenter::new(text);
        let breaks = oracle_for(text, &lines, WordBreak::KeepAll);
        assert!(breaks.contains(&4), "break after the space survives: {breaks:?}");
        assert!(!breaks.contains(&7), "break between ideographs is suppressed");
    }
}
