// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-text cached segmentation boundaries.
//!
//! The chunker addresses the rendering text by byte offset and repeatedly
//! asks "where is the next boundary after here". The ICU segmenters produce
//! forward iterators over a whole string, so each segmenter is run once per
//! text and its boundaries kept sorted for lookup. Both types are owned by
//! [`crate::InlineText`] and rebuilt when the rendering text is invalidated.

use alloc::vec::Vec;

use icu_segmenter::options::LineBreakOptions;
use icu_segmenter::GraphemeClusterSegmenter;
use icu_segmenter::LineSegmenter as Uax14Segmenter;

/// Grapheme-cluster boundaries (UAX #29) of one rendering text.
#[derive(Clone, Debug)]
pub struct GraphemeSegmenter(GraphemeRepr);

#[derive(Clone, Debug)]
enum GraphemeRepr {
    /// Pure ASCII: every byte is its own cluster, no table needed.
    Ascii { len: usize },
    /// Sorted boundary offsets, excluding position zero.
    Boundaries(Vec<usize>),
}

impl GraphemeSegmenter {
    /// Segments `text` and caches its cluster boundaries.
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self(GraphemeRepr::Ascii { len: text.len() });
        }
        let boundaries = GraphemeClusterSegmenter::new()
            .segment_str(text)
            .skip(1) // the leading zero boundary
            .collect();
        Self(GraphemeRepr::Boundaries(boundaries))
    }

    /// Returns the first cluster boundary strictly after `index`, if any.
    pub fn next_boundary(&self, index: usize) -> Option<usize> {
        match &self.0 {
            GraphemeRepr::Ascii { len } => (index < *len).then(|| index + 1),
            GraphemeRepr::Boundaries(boundaries) => {
                let i = boundaries.partition_point(|&b| b <= index);
                boundaries.get(i).copied()
            }
        }
    }

    /// Whether `index` is a valid cluster boundary (0 and the text length
    /// always are).
    pub fn is_boundary(&self, index: usize) -> bool {
        match &self.0 {
            GraphemeRepr::Ascii { len } => index <= *len,
            GraphemeRepr::Boundaries(boundaries) => {
                index == 0 || boundaries.binary_search(&index).is_ok()
            }
        }
    }
}

/// Line-break boundaries (UAX #14) of one rendering text.
///
/// Position zero is never a boundary (there is nothing to wrap before the
/// first character); the end of the text always is.
#[derive(Clone, Debug)]
pub struct LineSegmenter {
    boundaries: Vec<usize>,
}

impl LineSegmenter {
    /// Segments `text` and caches its line-break boundaries.
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = Uax14Segmenter::new_auto(LineBreakOptions::default())
            .segment_str(text)
            .collect();
        // ICU emits a leading zero boundary, which is not a wrap point.
        if boundaries.first() == Some(&0) {
            boundaries.remove(0);
        }
        Self { boundaries }
    }

    /// Returns the next boundary at (`inclusive`) or strictly after `index`.
    pub fn next_boundary(&self, index: usize, inclusive: bool) -> Option<usize> {
        let i = if inclusive {
            self.boundaries.partition_point(|&b| b < index)
        } else {
            self.boundaries.partition_point(|&b| b <= index)
        };
        self.boundaries.get(i).copied()
    }

    /// Whether `index` itself is a line-break boundary.
    pub fn is_boundary(&self, index: usize) -> bool {
        self.next_boundary(index, true) == Some(index)
    }
}
