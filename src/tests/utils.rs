// Copyright 2026 the Textchunk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic font stand-ins for chunking tests.

use crate::{Chunk, ChunkIterator, Font, FontCascade};

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TestFont {
    pub name: &'static str,
    pub emoji: bool,
}

impl Font for TestFont {
    fn is_emoji_font(&self) -> bool {
        self.emoji
    }
}

/// A cascade with three fixed faces: a default text face, a CJK face, and
/// an emoji face. The CJK face is only selected when `split_cjk` is set, so
/// uniform-font scenarios can reuse the same type.
#[derive(Debug)]
pub(crate) struct TestFontCascade {
    text: TestFont,
    cjk: TestFont,
    emoji: TestFont,
    split_cjk: bool,
}

impl TestFontCascade {
    /// Every non-emoji code point resolves to the same face.
    pub(crate) fn uniform() -> Self {
        Self::with_split_cjk(false)
    }

    /// CJK code points fall back to a separate face.
    pub(crate) fn scripted() -> Self {
        Self::with_split_cjk(true)
    }

    fn with_split_cjk(split_cjk: bool) -> Self {
        Self {
            text: TestFont {
                name: "Test Sans",
                emoji: false,
            },
            cjk: TestFont {
                name: "Test CJK",
                emoji: false,
            },
            emoji: TestFont {
                name: "Test Emoji",
                emoji: true,
            },
            split_cjk,
        }
    }

    pub(crate) fn text_face(&self) -> &TestFont {
        &self.text
    }

    pub(crate) fn cjk_face(&self) -> &TestFont {
        &self.cjk
    }

    pub(crate) fn emoji_face(&self) -> &TestFont {
        &self.emoji
    }
}

impl FontCascade for TestFontCascade {
    type Font = TestFont;

    fn font_for_code_point(&self, code_point: char) -> &TestFont {
        match code_point as u32 {
            0x1F000..=0x1FAFF => &self.emoji,
            0x3000..=0x9FFF | 0xFF00..=0xFFEF if self.split_cjk => &self.cjk,
            _ => &self.text,
        }
    }

    fn first_text_face(&self) -> &TestFont {
        &self.text
    }
}

pub(crate) fn collect<'a, C: FontCascade>(
    iterator: ChunkIterator<'a, C>,
) -> Vec<Chunk<'a, C::Font>> {
    iterator.collect()
}

pub(crate) fn views<'a, F: Font>(chunks: &'a [Chunk<'a, F>]) -> Vec<&'a str> {
    chunks.iter().map(|chunk| chunk.view).collect()
}
