// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse bidirectional classification.
//!
//! Chunk segmentation only needs to know where the directional class of the
//! text changes, not the full UAX #9 resolution, so the Unicode `Bidi_Class`
//! property is collapsed into four buckets. Reordering chunks into visual
//! order is the consumer's job.

use icu_properties::props::BidiClass;
use icu_properties::CodePointMapData;

/// Coarse bidirectional class of a code point, shared by a whole chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextType {
    /// Strongly left-to-right.
    Ltr,
    /// Strongly right-to-left.
    Rtl,
    /// Direction-neutral; joins either surrounding run.
    Common,
    /// Resolves against surrounding text (whitespace, digits, separators).
    ContextDependent,
}

const fn ascii_text_type(code_point: u8) -> TextType {
    match code_point {
        // Controls with Bidi_Class S/B/WS, space, number signs and
        // separators, digits: all resolve against context.
        0x09..=0x0D | 0x1C..=0x20 | 0x23..=0x25 | 0x2B..=0x3A => TextType::ContextDependent,
        b'A'..=b'Z' | b'a'..=b'z' => TextType::Ltr,
        // Everything else in ASCII is neutral ('@' and '`' included).
        _ => TextType::Common,
    }
}

static ASCII_TEXT_TYPES: [TextType; 128] = {
    let mut table = [TextType::Common; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = ascii_text_type(i as u8);
        i += 1;
    }
    table
};

/// Returns the coarse bidirectional class of `code_point`.
///
/// ASCII resolves through a static table; everything else maps the full
/// `Bidi_Class` property value into the four-bucket coarsening.
pub fn text_type_for_code_point(code_point: char) -> TextType {
    if (code_point as u32) < 0x80 {
        return ASCII_TEXT_TYPES[code_point as usize];
    }

    match CodePointMapData::<BidiClass>::new().get(code_point) {
        BidiClass::WhiteSpace
        | BidiClass::ParagraphSeparator
        | BidiClass::SegmentSeparator
        | BidiClass::CommonSeparator
        | BidiClass::NonspacingMark
        | BidiClass::ArabicNumber
        | BidiClass::EuropeanNumber
        | BidiClass::EuropeanSeparator
        | BidiClass::EuropeanTerminator => TextType::ContextDependent,

        BidiClass::BoundaryNeutral
        | BidiClass::OtherNeutral
        | BidiClass::FirstStrongIsolate
        | BidiClass::PopDirectionalFormat
        | BidiClass::PopDirectionalIsolate => TextType::Common,

        BidiClass::LeftToRight
        | BidiClass::LeftToRightEmbedding
        | BidiClass::LeftToRightIsolate
        | BidiClass::LeftToRightOverride => TextType::Ltr,

        BidiClass::RightToLeft
        | BidiClass::ArabicLetter
        | BidiClass::RightToLeftEmbedding
        | BidiClass::RightToLeftIsolate
        | BidiClass::RightToLeftOverride => TextType::Rtl,

        // The Unicode data tables and this switch must agree on the set of
        // Bidi_Class values.
        _ => unreachable!("unknown Bidi_Class value"),
    }
}
