// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal atomically-paintable text chunks for inline layout.
//!
//! This crate takes one run of inline text, applies CSS `text-transform`
//! and the `white-space-collapse` phase-1 conversions, and then segments
//! the resulting "rendering text" into [`Chunk`]s: spans of code units that
//! share a single font and a single coarse bidirectional class, annotated
//! with forced-break (newline/tab) and soft-wrap metadata.
//!
//! The pipeline is pull-based and lazy. [`InlineText`] owns the raw text,
//! the resolved style inputs and the cached rendering text plus its
//! segmenters; [`ChunkIterator`] walks the rendering text one grapheme
//! cluster at a time and emits chunks to the line-breaking consumer.
//!
//! Font selection and fallback are external concerns, consumed through the
//! [`FontCascade`] and [`Font`] traits. Bidirectional *reordering* (full
//! UAX #9) is likewise out of scope; only the per-code-point classification
//! needed to keep a chunk direction-uniform lives here.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod bidi;
mod break_opportunity;
mod chunk;
mod font;
mod normalize;
mod segment;
mod style;
mod text;
mod transform;

#[cfg(test)]
mod tests;

pub use bidi::{text_type_for_code_point, TextType};
pub use break_opportunity::BreakOpportunityOracle;
pub use chunk::{Chunk, ChunkIterator};
pub use font::{Font, FontCascade};
pub use normalize::normalize_whitespace;
pub use segment::{GraphemeSegmenter, LineSegmenter};
pub use style::{TextStyle, TextTransform, WhiteSpaceCollapse, WordBreak};
pub use text::InlineText;
pub use transform::apply_text_transform;
