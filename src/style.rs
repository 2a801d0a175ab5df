// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-resolved CSS style inputs.
//!
//! The computed-style layer is responsible for normalizing author values to
//! these enums before chunking is invoked; no unrecognized keyword reaches
//! this crate.

use icu_locale_core::LanguageIdentifier;

/// CSS `text-transform`.
///
/// See: <https://www.w3.org/TR/css-text-3/#text-transform-property> and, for
/// `math-auto`, <https://w3c.github.io/mathml-core/#new-text-transform-values>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextTransform {
    /// No transformation.
    #[default]
    None,
    /// Force all letters to uppercase.
    Uppercase,
    /// Force all letters to lowercase.
    Lowercase,
    /// Titlecase the first typographic letter unit of each word.
    Capitalize,
    /// Replace narrow forms with their fullwidth counterparts.
    FullWidth,
    /// Replace small kana with their full-size counterparts.
    FullSizeKana,
    /// Map eligible letters to their italic math-alphanumeric code points.
    MathAuto,
}

/// CSS `white-space-collapse`.
///
/// See: <https://drafts.csswg.org/css-text-4/#white-space-collapsing>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WhiteSpaceCollapse {
    /// Collapse whitespace sequences; segment breaks become collapsible spaces.
    #[default]
    Collapse,
    /// Collapse spaces and tabs but preserve segment breaks as forced breaks.
    PreserveBreaks,
    /// Preserve spaces; tabs and segment breaks each become a space.
    PreserveSpaces,
    /// Preserve everything.
    Preserve,
}

impl WhiteSpaceCollapse {
    /// Whether whitespace is considered collapsible under this mode.
    pub fn is_collapsing(self) -> bool {
        matches!(self, Self::Collapse | Self::PreserveBreaks)
    }
}

/// CSS `word-break`.
///
/// See: <https://www.w3.org/TR/css-text-3/#word-break-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WordBreak {
    /// Customary rules.
    #[default]
    Normal,
    /// Breaking is allowed within "words".
    BreakAll,
    /// Breaking is forbidden within "words".
    KeepAll,
    /// Legacy value; behaves like `Normal` for break-opportunity queries.
    BreakWord,
}

/// Resolved style inputs for one inline text run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TextStyle {
    /// Computed `text-transform`.
    pub text_transform: TextTransform,
    /// Computed `white-space-collapse`.
    pub white_space_collapse: WhiteSpaceCollapse,
    /// Computed `word-break`.
    pub word_break: WordBreak,
    /// Content language, used by locale-aware case mapping.
    pub lang: Option<LanguageIdentifier>,
}
