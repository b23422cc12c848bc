// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics from a monospaced glyph sheet.

use std::collections::HashMap;

use crate::descriptor::validate_bitmap;
use crate::error::FontError;
use crate::pixmap::Pixmap;
use crate::providers::{FontProvider, GlyphMetrics};

/// Metrics extracted from a sheet cut into a grid of equal cells.
///
/// Cell size is the sheet size divided by the grid size. A glyph's
/// actual width is found by scanning cell columns right to left for the
/// first populated pixel; its advance rescales that width to the
/// declared line height, plus one pixel of spacing.
#[derive(Debug)]
pub struct BitmapProvider {
    glyphs: HashMap<char, GlyphMetrics>,
}

impl BitmapProvider {
    /// Extract metrics for every character the grid names.
    ///
    /// NUL and space cells are placeholders, not glyphs; characters in
    /// those cells stay unmapped.
    pub fn new(
        image: Pixmap,
        chars: &[String],
        height: i32,
        ascent: i32,
    ) -> Result<Self, FontError> {
        validate_bitmap(chars, height, ascent)?;
        let cols = chars[0].chars().count();
        let rows = chars.len();
        let cell_w = usize::from(image.width()) / cols;
        let cell_h = usize::from(image.height()) / rows;
        if cell_w == 0 || cell_h == 0 {
            return Err(FontError::Descriptor(format!(
                "glyph sheet {}x{} too small for a {cols}x{rows} grid",
                image.width(),
                image.height()
            )));
        }
        let scale = height as f32 / cell_h as f32;
        let mut glyphs = HashMap::new();
        for (row, line) in chars.iter().enumerate() {
            for (col, g) in line.chars().enumerate() {
                if g == '\0' || g == ' ' {
                    continue;
                }
                let actual = actual_glyph_width(&image, cell_w, cell_h, col, row);
                let advance = (0.5 + f64::from(actual as f32 * scale)) as i32 + 1;
                glyphs.insert(
                    g,
                    GlyphMetrics {
                        width: cell_w as i32,
                        height: 16,
                        advance: advance as f32,
                    },
                );
            }
        }
        Ok(Self { glyphs })
    }
}

/// Rightmost populated column of a cell, plus one. A blank cell is 0.
fn actual_glyph_width(image: &Pixmap, cell_w: usize, cell_h: usize, col: usize, row: usize) -> i32 {
    let x_offset = cell_w * col;
    let y_offset = cell_h * row;
    for ws in (0..cell_w).rev() {
        for l in 0..cell_h {
            if image.luminance_or_alpha((x_offset + ws) as u16, (y_offset + l) as u16) != 0 {
                return ws as i32 + 1;
            }
        }
    }
    0
}

impl FontProvider for BitmapProvider {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::Rgba8;

    const CLEAR: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    const INK: Rgba8 = Rgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    fn sheet(width: u16, height: u16, fill: impl Fn(u16, u16) -> bool) -> Pixmap {
        let mut data = Vec::with_capacity(usize::from(width) * usize::from(height));
        for y in 0..height {
            for x in 0..width {
                data.push(if fill(x, y) { INK } else { CLEAR });
            }
        }
        Pixmap::from_parts(data, width, height)
    }

    #[test]
    fn opaque_cells_span_the_full_cell_width() {
        // 2x2 grid of 4x4 cells, every pixel populated.
        let image = sheet(8, 8, |_, _| true);
        let chars = ["ab".to_owned(), "cd".to_owned()];
        let provider = BitmapProvider::new(image, &chars, 8, 7).unwrap();
        let glyph = provider.glyph('a').unwrap();
        assert_eq!(glyph.width, 4);
        // advance = round(4 * 8/4) + 1
        assert_eq!(glyph.advance, 9.0);
        assert_eq!(provider.glyph('d').unwrap().advance, 9.0);
    }

    #[test]
    fn blank_cells_advance_one() {
        // 'b' cell (right half) is empty.
        let image = sheet(8, 4, |x, _| x < 4);
        let chars = ["ab".to_owned()];
        let provider = BitmapProvider::new(image, &chars, 8, 7).unwrap();
        assert_eq!(provider.glyph('b').unwrap().advance, 1.0);
    }

    #[test]
    fn partial_columns_stop_the_scan() {
        // Ink only in the two leftmost columns of the single 8x4 cell.
        let image = sheet(8, 4, |x, _| x < 2);
        let chars = ["a".to_owned()];
        let provider = BitmapProvider::new(image, &chars, 8, 7).unwrap();
        // actual width 2, scale 8/4 = 2 => round(2 * 2) + 1
        assert_eq!(provider.glyph('a').unwrap().advance, 5.0);
    }

    #[test]
    fn space_cells_stay_unmapped() {
        let image = sheet(8, 4, |_, _| true);
        let chars = ["a ".to_owned()];
        let provider = BitmapProvider::new(image, &chars, 8, 7).unwrap();
        assert!(provider.glyph(' ').is_none());
    }
}
