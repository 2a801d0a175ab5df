// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inline text run and its lazily computed rendering text.

use alloc::borrow::Cow;
use alloc::string::String;
use core::cell::OnceCell;

use crate::normalize::normalize_whitespace;
use crate::segment::{GraphemeSegmenter, LineSegmenter};
use crate::style::TextStyle;
use crate::transform::apply_text_transform;

/// One inline text run: raw data, resolved style, and the cached rendering
/// text with its segmenters.
///
/// The rendering text (post `text-transform`, post whitespace conversion)
/// and both segmenters are computed on first access and kept until an input
/// changes. Every mutator invalidates the cache; a stale cache is never
/// observable.
#[derive(Clone, Debug, Default)]
pub struct InlineText {
    data: String,
    style: TextStyle,
    obscured: bool,
    rendered: OnceCell<Rendered>,
}

#[derive(Clone, Debug)]
struct Rendered {
    text: String,
    graphemes: GraphemeSegmenter,
    lines: LineSegmenter,
}

impl InlineText {
    /// Creates a run over `data` with the given resolved style.
    pub fn new(data: impl Into<String>, style: TextStyle) -> Self {
        Self {
            data: data.into(),
            style,
            obscured: false,
            rendered: OnceCell::new(),
        }
    }

    /// The raw (untransformed) text.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The resolved style inputs.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Replaces the raw text.
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
        self.invalidate_text_for_rendering();
    }

    /// Replaces the resolved style (including the content language).
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.invalidate_text_for_rendering();
    }

    /// Obscured runs render one `*` per code point of the raw data
    /// (password fields).
    pub fn set_obscured(&mut self, obscured: bool) {
        self.obscured = obscured;
        self.invalidate_text_for_rendering();
    }

    /// Drops the cached rendering text and segmenters. Called by every
    /// mutator; also the hook for external invalidation (e.g. a document
    /// language change that is not routed through [`Self::set_style`]).
    pub fn invalidate_text_for_rendering(&mut self) {
        self.rendered = OnceCell::new();
    }

    /// The rendering text: raw data with `text-transform` applied and
    /// whitespace converted per `white-space-collapse`.
    pub fn text_for_rendering(&self) -> &str {
        &self.rendered().text
    }

    /// Grapheme-cluster boundaries of the rendering text.
    pub fn grapheme_segmenter(&self) -> &GraphemeSegmenter {
        &self.rendered().graphemes
    }

    /// Line-break boundaries of the rendering text.
    pub fn line_segmenter(&self) -> &LineSegmenter {
        &self.rendered().lines
    }

    fn rendered(&self) -> &Rendered {
        self.rendered.get_or_init(|| {
            let text = self.compute_text_for_rendering();
            let graphemes = GraphemeSegmenter::new(&text);
            let lines = LineSegmenter::new(&text);
            Rendered {
                text,
                graphemes,
                lines,
            }
        })
    }

    fn compute_text_for_rendering(&self) -> String {
        if self.obscured {
            return "*".repeat(self.data.chars().count());
        }

        let transformed = apply_text_transform(
            &self.data,
            self.style.text_transform,
            self.style.lang.as_ref(),
        );
        match normalize_whitespace(&transformed, self.style.white_space_collapse) {
            // Unchanged by whitespace conversion; keep the transformed text.
            Cow::Borrowed(_) => transformed.into_owned(),
            Cow::Owned(converted) => converted,
        }
    }
}
