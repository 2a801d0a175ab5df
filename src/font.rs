// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the embedding font system.
//!
//! Chunking never inspects glyphs; it only needs to know which face the
//! fallback machinery would pick for a code point, so that a chunk never
//! spans a face change, and whether a face is an emoji font, so interword
//! spaces are not rendered in one.

/// A resolved font face, as seen by the chunker.
pub trait Font {
    /// Whether this face is an emoji font.
    fn is_emoji_font(&self) -> bool;
}

/// Font selection and fallback for a run of text.
///
/// Implemented by the embedding font system, whatever shape it takes there
/// (a cascade of loaded web fonts, a list of local typefaces). Selection
/// must be stable for the lifetime of a chunking pass: chunk boundaries
/// compare faces by reference identity, not by name.
pub trait FontCascade {
    /// The face type this cascade resolves to.
    type Font: Font;

    /// The face the fallback machinery selects for `code_point`.
    fn font_for_code_point(&self, code_point: char) -> &Self::Font;

    /// The first non-emoji text face of the cascade. Used as the last-resort
    /// face for whitespace-only runs.
    fn first_text_face(&self) -> &Self::Font;
}

/// Face identity, the equivalence chunk boundaries are decided by.
pub(crate) fn same_font<F>(a: &F, b: &F) -> bool {
    core::ptr::eq(a, b)
}
