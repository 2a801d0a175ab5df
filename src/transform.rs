// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `text-transform` application.

use alloc::borrow::Cow;
use alloc::string::String;

use icu_casemap::options::{TitlecaseOptions, TrailingCase};
use icu_casemap::{CaseMapper, TitlecaseMapper};
use icu_locale_core::LanguageIdentifier;
use icu_segmenter::options::WordBreakInvariantOptions;
use icu_segmenter::WordSegmenter;

use crate::style::TextTransform;

/// Applies `transform` to `text`, producing the text used for rendering.
///
/// Case transforms are locale-aware; `lang` defaults to the root locale.
/// The code-point mapping transforms (`full-width`, `full-size-kana`,
/// `math-auto`) replace individual code points via static tables and leave
/// unmapped code points untouched; they return the input unchanged (without
/// allocating) when nothing maps.
pub fn apply_text_transform<'a>(
    text: &'a str,
    transform: TextTransform,
    lang: Option<&LanguageIdentifier>,
) -> Cow<'a, str> {
    let root = LanguageIdentifier::UNKNOWN;
    let langid = lang.unwrap_or(&root);

    match transform {
        TextTransform::None => Cow::Borrowed(text),
        TextTransform::Uppercase => CaseMapper::new().uppercase_to_string(text, langid),
        TextTransform::Lowercase => CaseMapper::new().lowercase_to_string(text, langid),
        TextTransform::Capitalize => Cow::Owned(capitalize(text, langid)),
        TextTransform::FullWidth => map_code_points(text, to_fullwidth),
        TextTransform::FullSizeKana => map_code_points(text, to_full_size_kana),
        TextTransform::MathAuto => map_code_points(text, to_math_italic),
    }
}

/// Titlecases the first letter of every word segment, leaving trailing code
/// points as-is so that e.g. interior uppercase survives the transform.
fn capitalize(text: &str, langid: &LanguageIdentifier) -> String {
    let mapper = TitlecaseMapper::new();
    let mut options = TitlecaseOptions::default();
    options.trailing_case = Some(TrailingCase::Unchanged);

    let segmenter = WordSegmenter::new_auto(WordBreakInvariantOptions::default());
    let mut output = String::with_capacity(text.len());
    let mut start = 0;
    for end in segmenter.segment_str(text).skip(1) {
        output.push_str(&mapper.titlecase_segment_to_string(&text[start..end], langid, options));
        start = end;
    }
    output
}

fn map_code_points(text: &str, map: impl Fn(char) -> char) -> Cow<'_, str> {
    if text.chars().all(|c| map(c) == c) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(map).collect())
}

/// Maps mathematical-alphanumeric-eligible letters and a fixed set of math
/// symbols to their italic math code points.
///
/// See: <https://w3c.github.io/mathml-core/#italic-mappings>
fn to_math_italic(c: char) -> char {
    let cp = c as u32;
    let mapped = match cp {
        0x0041..=0x005A => 0x1D434 + (cp - 0x0041),
        // Italic small h is the pre-existing Planck constant code point.
        0x0068 => 0x210E,
        0x0061..=0x007A => 0x1D44E + (cp - 0x0061),
        // Dotless i and j.
        0x0131 => 0x1D6A4,
        0x0237 => 0x1D6A5,
        // Greek capitals Alpha..Rho, then Sigma..Omega (U+03A2 is unassigned).
        0x0391..=0x03A1 => 0x1D6E2 + (cp - 0x0391),
        0x03A3..=0x03A9 => 0x1D6F4 + (cp - 0x03A3),
        0x03F4 => 0x1D6F3,
        // Greek smalls alpha..omega, including final sigma.
        0x03B1..=0x03C9 => 0x1D6FC + (cp - 0x03B1),
        0x2207 => 0x1D6FB,
        0x2202 => 0x1D715,
        0x03F5 => 0x1D716,
        0x03D1 => 0x1D717,
        0x03F0 => 0x1D718,
        0x03D5 => 0x1D719,
        0x03F1 => 0x1D71A,
        0x03D6 => 0x1D71B,
        _ => return c,
    };
    char::from_u32(mapped).expect("math italic table produces valid code points")
}

/// Maps ASCII to the Halfwidth and Fullwidth Forms block.
fn to_fullwidth(c: char) -> char {
    match c {
        ' ' => '\u{3000}',
        '!'..='~' => char::from_u32(c as u32 - 0x21 + 0xFF01)
            .expect("fullwidth forms block covers all of printable ASCII"),
        _ => c,
    }
}

/// Maps small kana to their full-size counterparts.
///
/// See: <https://www.w3.org/TR/css-text-3/#small-kana>
fn to_full_size_kana(c: char) -> char {
    match c {
        // Hiragana.
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'っ' => 'つ',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'ゎ' => 'わ',
        'ゕ' => 'か',
        'ゖ' => 'け',
        // Katakana.
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ッ' => 'ツ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        'ヮ' => 'ワ',
        'ヵ' => 'カ',
        'ヶ' => 'ケ',
        // Halfwidth katakana.
        'ｧ' => 'ｱ',
        'ｨ' => 'ｲ',
        'ｩ' => 'ｳ',
        'ｪ' => 'ｴ',
        'ｫ' => 'ｵ',
        'ｯ' => 'ﾂ',
        'ｬ' => 'ﾔ',
        'ｭ' => 'ﾕ',
        'ｮ' => 'ﾖ',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(text: &str, transform: TextTransform) -> String {
        apply_text_transform(text, transform, None).into_owned()
    }

    #[test]
    fn none_is_passthrough() {
        assert!(matches!(
            apply_text_transform("Hello", TextTransform::None, None),
            Cow::Borrowed("Hello")
        ));
    }

    #[test]
    fn uppercase_and_lowercase() {
        assert_eq!(transform("Straße", TextTransform::Uppercase), "STRASSE");
        assert_eq!(transform("HELLO", TextTransform::Lowercase), "hello");
    }

    #[test]
    fn uppercase_respects_locale() {
        let turkish: LanguageIdentifier = "tr".parse().unwrap();
        let upper = apply_text_transform("istanbul", TextTransform::Uppercase, Some(&turkish));
        assert_eq!(upper, "İSTANBUL");
    }

    #[test]
    fn capitalize_titlecases_each_word() {
        assert_eq!(
            transform("hello brave world", TextTransform::Capitalize),
            "Hello Brave World"
        );
    }

    #[test]
    fn capitalize_preserves_trailing_case() {
        assert_eq!(transform("iPhone del", TextTransform::Capitalize), "IPhone Del");
        assert_eq!(transform("McDONALD", TextTransform::Capitalize), "McDONALD");
    }

    #[test]
    fn math_auto_maps_latin_and_greek() {
        assert_eq!(transform("Ax", TextTransform::MathAuto), "\u{1D434}\u{1D465}");
        // Small h maps to the Planck constant, not the contiguous block.
        assert_eq!(transform("h", TextTransform::MathAuto), "\u{210E}");
        assert_eq!(transform("αΩ", TextTransform::MathAuto), "\u{1D6FC}\u{1D6FA}");
        assert_eq!(transform("∇∂", TextTransform::MathAuto), "\u{1D6FB}\u{1D715}");
    }

    #[test]
    fn math_auto_passes_unmapped_through() {
        assert_eq!(transform("1 + 2", TextTransform::MathAuto), "1 + 2");
    }

    #[test]
    fn fullwidth_maps_ascii() {
        assert_eq!(transform("A1!", TextTransform::FullWidth), "Ａ１！");
        assert_eq!(transform(" ", TextTransform::FullWidth), "\u{3000}");
    }

    #[test]
    fn full_size_kana() {
        assert_eq!(transform("きって", TextTransform::FullSizeKana), "きつて");
        assert_eq!(transform("ャ", TextTransform::FullSizeKana), "ヤ");
    }

    #[test]
    fn transforms_are_idempotent() {
        for mode in [
            TextTransform::None,
            TextTransform::Uppercase,
            TextTransform::Lowercase,
            TextTransform::Capitalize,
            TextTransform::FullWidth,
            TextTransform::FullSizeKana,
            TextTransform::MathAuto,
        ] {
            let once = transform("Hello ゃ x∇ WORLD", mode);
            let twice = transform(&once, mode);
            assert_eq!(once, twice, "{mode:?} should be a projection");
        }
    }
}
