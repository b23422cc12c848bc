// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics from the legacy unicode width table.
//!
//! The table packs one byte per code unit: the high nibble is the glyph
//! start column, the low nibble its end column within a 16 pixel cell.

use crate::providers::{FontProvider, GlyphMetrics};

/// The packed width table of the legacy unicode font.
#[derive(Debug, Clone)]
pub struct LegacyUnicodeProvider {
    table: Vec<u8>,
}

impl LegacyUnicodeProvider {
    /// Wrap a raw width table.
    pub fn new(table: Vec<u8>) -> Self {
        Self { table }
    }
}

impl FontProvider for LegacyUnicodeProvider {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        let info = *self.table.get(c as usize)?;
        if info == 0 {
            return None;
        }
        let width = i32::from(info & 0xF) + 1 - i32::from((info >> 4) & 0xF);
        Some(GlyphMetrics {
            width,
            height: 16,
            advance: width as f32 / 2.0 + 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles_give_start_and_end_columns() {
        let mut table = vec![0_u8; 0x100];
        // 'A' spans columns 2..=9: width 8, advance 5.
        table[b'A' as usize] = 0x29;
        let provider = LegacyUnicodeProvider::new(table);
        let glyph = provider.glyph('A').unwrap();
        assert_eq!(glyph.width, 8);
        assert_eq!(glyph.advance, 5.0);
        assert_eq!(glyph.height, 16);
    }

    #[test]
    fn zero_entries_and_out_of_range_are_unmapped() {
        let provider = LegacyUnicodeProvider::new(vec![0_u8; 0x100]);
        assert!(provider.glyph('A').is_none());
        assert!(provider.glyph('\u{1F600}').is_none());
    }
}
