// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chunk producer.
//!
//! [`ChunkIterator`] walks the rendering text one grapheme cluster at a time
//! and commits the span accumulated so far whenever the font, the coarse
//! bidirectional class, or the whitespace situation changes underneath it.
//! Chunks come out in strictly increasing start order; every committed chunk
//! is non-empty.

use alloc::collections::VecDeque;

use crate::bidi::{text_type_for_code_point, TextType};
use crate::break_opportunity::BreakOpportunityOracle;
use crate::font::{same_font, Font, FontCascade};
use crate::normalize::is_ascii_space;
use crate::segment::GraphemeSegmenter;
use crate::text::InlineText;

/// One atomic, unsplittable span of rendering text.
///
/// All code points in the span resolve to `font` and classify as
/// `text_type`; the span never straddles a grapheme-cluster boundary. A
/// chunk that carries `has_breaking_newline` is exactly the newline
/// character itself.
#[derive(Debug)]
pub struct Chunk<'a, F: Font> {
    /// The chunk's slice of the rendering text.
    pub view: &'a str,
    /// Byte offset of `view` in the rendering text.
    pub start: usize,
    /// Byte length of `view`.
    pub length: usize,
    /// The single font every code point in the span resolves to.
    pub font: &'a F,
    /// The single coarse bidirectional class of the span.
    pub text_type: TextType,
    /// Whether every code point in the span is ASCII whitespace.
    pub is_all_whitespace: bool,
    /// This chunk is a preserved newline (forced line break).
    pub has_breaking_newline: bool,
    /// This chunk was preceded by a preserved tab run (forced tab stop).
    pub has_breaking_tab: bool,
    /// A soft wrap opportunity exists immediately after this chunk.
    pub can_break_after: bool,
}

// Not derived: a chunk only holds references to the font, so it is copyable
// whether or not the font type is.
impl<F: Font> Clone for Chunk<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Font> Copy for Chunk<'_, F> {}

/// Lazy, forward-only producer of [`Chunk`]s over one [`InlineText`].
///
/// Single-pass: callers that need to restart construct a new iterator,
/// which is cheap because the rendering text and segmenters are cached on
/// the [`InlineText`]. [`ChunkIterator::peek`] buffers already-produced
/// chunks in a FIFO without disturbing later `next` results.
pub struct ChunkIterator<'a, C: FontCascade> {
    view: &'a str,
    fonts: &'a C,
    graphemes: &'a GraphemeSegmenter,
    oracle: BreakOpportunityOracle<'a>,
    should_wrap_lines: bool,
    should_respect_linebreaks: bool,
    should_collapse_whitespace: bool,
    current_index: usize,
    peek_queue: VecDeque<Chunk<'a, C::Font>>,
    /// Font of the most recently committed non-whitespace chunk; used to
    /// pick a plausible font for interword spaces.
    last_non_whitespace_font: Option<&'a C::Font>,
}

impl<'a, C: FontCascade> ChunkIterator<'a, C> {
    /// Creates an iterator over `text`'s rendering text.
    ///
    /// `should_wrap_lines` enables soft-wrap chunking (text-type splits,
    /// standalone space chunks, break-opportunity commits);
    /// `should_respect_linebreaks` makes preserved newlines forced breaks.
    pub fn new(
        text: &'a InlineText,
        fonts: &'a C,
        should_wrap_lines: bool,
        should_respect_linebreaks: bool,
    ) -> Self {
        let view = text.text_for_rendering();
        Self {
            view,
            fonts,
            graphemes: text.grapheme_segmenter(),
            oracle: BreakOpportunityOracle::new(
                view,
                text.line_segmenter(),
                text.style().word_break,
                should_wrap_lines,
            ),
            should_wrap_lines,
            should_respect_linebreaks,
            should_collapse_whitespace: text.style().white_space_collapse.is_collapsing(),
            current_index: 0,
            peek_queue: VecDeque::new(),
            last_non_whitespace_font: None,
        }
    }

    /// Returns the chunk `count` positions ahead without consuming anything.
    pub fn peek(&mut self, count: usize) -> Option<Chunk<'a, C::Font>> {
        while self.peek_queue.len() <= count {
            let next = self.next_without_peek()?;
            self.peek_queue.push_back(next);
        }
        self.peek_queue.get(count).copied()
    }

    fn code_point_at(&self, index: usize) -> char {
        self.view[index..]
            .chars()
            .next()
            .expect("index lies on a char boundary inside the text")
    }

    fn code_point_before(&self, index: usize) -> char {
        self.view[..index]
            .chars()
            .next_back()
            .expect("index lies on a char boundary past the first character")
    }

    fn next_grapheme_boundary(&self) -> usize {
        self.graphemes
            .next_boundary(self.current_index)
            .unwrap_or(self.view.len())
    }

    /// Collapsible per CSS: whitespace, under a collapsing mode.
    fn is_collapsible(&self, code_point: char) -> bool {
        self.should_collapse_whitespace && is_ascii_space(code_point)
    }

    fn is_interword_space(code_point: char) -> bool {
        matches!(code_point, ' ' | '\u{A0}')
    }

    /// The font the fallback machinery would select for the code point at
    /// `index`; interword spaces get the space-specific resolution.
    fn expected_font(&self, code_point: char, index: usize) -> &'a C::Font {
        if Self::is_interword_space(code_point) {
            self.font_for_space(index)
        } else {
            self.fonts.font_for_code_point(code_point)
        }
    }

    /// Resolves a plausible font for an interword space at `at_index`.
    ///
    /// Spaces carry no script signal of their own, so prefer the font of the
    /// surrounding text: the last committed non-whitespace chunk, then the
    /// first visible code point after the whitespace run. Emoji faces are
    /// skipped in both cases so a plain space is never rendered in one; an
    /// all-whitespace run falls back to the cascade's first text face.
    fn font_for_space(&self, at_index: usize) -> &'a C::Font {
        if let Some(font) = self.last_non_whitespace_font {
            if !font.is_emoji_font() {
                return font;
            }
        }

        let ahead = self.view[at_index..]
            .chars()
            .find(|&c| !matches!(c, ' ' | '\t' | '\n' | '\u{A0}'));
        if let Some(code_point) = ahead {
            let font = self.fonts.font_for_code_point(code_point);
            if !font.is_emoji_font() {
                return font;
            }
        }

        self.fonts.first_text_face()
    }

    fn next_without_peek(&mut self) -> Option<Chunk<'a, C::Font>> {
        'restart: loop {
            if self.current_index >= self.view.len() {
                return None;
            }

            let start_of_chunk = self.current_index;
            let mut code_point = self.code_point_at(self.current_index);
            let font = self.expected_font(code_point, self.current_index);
            let text_type = text_type_for_code_point(code_point);
            let mut broken_on_tab = false;

            while self.current_index < self.view.len() {
                code_point = self.code_point_at(self.current_index);

                if code_point == '\t' {
                    if let Some(chunk) = self.try_commit_chunk(
                        start_of_chunk,
                        self.current_index,
                        false,
                        broken_on_tab,
                        font,
                        text_type,
                    ) {
                        return Some(chunk);
                    }

                    broken_on_tab = true;
                    // Consume any consecutive tabs.
                    while self.current_index < self.view.len()
                        && self.code_point_at(self.current_index) == '\t'
                    {
                        self.current_index = self.next_grapheme_boundary();
                    }
                }

                if !same_font(font, self.expected_font(code_point, self.current_index)) {
                    if let Some(chunk) = self.try_commit_chunk(
                        start_of_chunk,
                        self.current_index,
                        false,
                        broken_on_tab,
                        font,
                        text_type,
                    ) {
                        return Some(chunk);
                    }
                }

                if self.should_respect_linebreaks && code_point == '\n' {
                    // If code points are pending, commit them now and pick
                    // the newline up on the next call.
                    if let Some(chunk) = self.try_commit_chunk(
                        start_of_chunk,
                        self.current_index,
                        false,
                        broken_on_tab,
                        font,
                        text_type,
                    ) {
                        return Some(chunk);
                    }

                    // Otherwise the newline is its own chunk.
                    self.current_index = self.next_grapheme_boundary();
                    let chunk = self
                        .try_commit_chunk(
                            start_of_chunk,
                            self.current_index,
                            true,
                            broken_on_tab,
                            font,
                            text_type,
                        )
                        .expect("a newline chunk is never empty");
                    return Some(chunk);
                }

                // A collapsible code point following another collapsible code
                // point collapses to nothing: commit what is pending and
                // skip to the next non-collapsible code point.
                if self.is_collapsible(code_point)
                    && self.current_index > 0
                    && self.is_collapsible(self.code_point_before(self.current_index))
                {
                    let chunk = self.try_commit_chunk(
                        start_of_chunk,
                        self.current_index,
                        false,
                        broken_on_tab,
                        font,
                        text_type,
                    );

                    while self.current_index < self.view.len()
                        && self.is_collapsible(self.code_point_at(self.current_index))
                    {
                        self.current_index = self.next_grapheme_boundary();
                    }

                    match chunk {
                        Some(chunk) => return Some(chunk),
                        // The skipped run contributes no chunk; rescan from
                        // the position after it.
                        None => continue 'restart,
                    }
                }

                if self.should_wrap_lines {
                    if text_type != text_type_for_code_point(code_point) {
                        if let Some(chunk) = self.try_commit_chunk(
                            start_of_chunk,
                            self.current_index,
                            false,
                            broken_on_tab,
                            font,
                            text_type,
                        ) {
                            return Some(chunk);
                        }
                    }

                    if is_ascii_space(code_point) {
                        // If code points are pending, commit them now and
                        // pick the whitespace up on the next call.
                        if let Some(chunk) = self.try_commit_chunk(
                            start_of_chunk,
                            self.current_index,
                            false,
                            broken_on_tab,
                            font,
                            text_type,
                        ) {
                            return Some(chunk);
                        }

                        // Otherwise the space is its own chunk, with a font
                        // resolved for the surrounding script rather than
                        // the running chunk font.
                        self.current_index = self.next_grapheme_boundary();
                        let space_font = self.font_for_space(self.current_index);
                        if let Some(chunk) = self.try_commit_chunk(
                            start_of_chunk,
                            self.current_index,
                            false,
                            broken_on_tab,
                            space_font,
                            text_type,
                        ) {
                            return Some(chunk);
                        }
                        continue;
                    }

                    if self
                        .oracle
                        .is_at_line_break_opportunity(self.current_index)
                    {
                        if let Some(chunk) = self.try_commit_chunk(
                            start_of_chunk,
                            self.current_index,
                            false,
                            broken_on_tab,
                            font,
                            text_type,
                        ) {
                            return Some(chunk);
                        }
                    }
                }

                self.current_index = self.next_grapheme_boundary();
            }

            if start_of_chunk != self.view.len() {
                // Whatever is left at the end of the text.
                if let Some(chunk) = self.try_commit_chunk(
                    start_of_chunk,
                    self.view.len(),
                    false,
                    broken_on_tab,
                    font,
                    text_type,
                ) {
                    return Some(chunk);
                }
            }

            return None;
        }
    }

    fn try_commit_chunk(
        &mut self,
        start: usize,
        end: usize,
        has_breaking_newline: bool,
        has_breaking_tab: bool,
        font: &'a C::Font,
        text_type: TextType,
    ) -> Option<Chunk<'a, C::Font>> {
        if end <= start {
            return None;
        }

        let view = &self.view[start..end];
        let is_all_whitespace = view.chars().all(is_ascii_space);
        if !is_all_whitespace {
            self.last_non_whitespace_font = Some(font);
        }

        Some(Chunk {
            view,
            start,
            length: end - start,
            font,
            text_type,
            is_all_whitespace,
            has_breaking_newline,
            has_breaking_tab,
            can_break_after: self.oracle.is_at_line_break_opportunity(end),
        })
    }
}

impl<C: FontCascade> core::fmt::Debug for ChunkIterator<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChunkIterator")
            .field("current_index", &self.current_index)
            .field("peeked", &self.peek_queue.len())
            .finish_non_exhaustive()
    }
}

impl<'a, C: FontCascade> Iterator for ChunkIterator<'a, C> {
    type Item = Chunk<'a, C::Font>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(chunk) = self.peek_queue.pop_front() {
            return Some(chunk);
        }
        self.next_without_peek()
    }
}
