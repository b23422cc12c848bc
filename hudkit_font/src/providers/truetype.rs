// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics from a TrueType font.

use std::collections::HashSet;

use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, MetadataProvider};

use crate::error::FontError;
use crate::providers::{FontProvider, GlyphMetrics};

/// Metrics computed from font tables at a pixel size.
///
/// The font is rasterized (notionally) at `size * oversample` pixels and
/// advances are divided back by the oversampling factor, matching the
/// client's supersampled glyph atlas.
pub struct TrueTypeProvider {
    data: Vec<u8>,
    size: f32,
    oversample: f32,
    shift_x: f32,
    shift_y: f32,
    skip: HashSet<char>,
}

impl std::fmt::Debug for TrueTypeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeProvider")
            .field("size", &self.size)
            .field("oversample", &self.oversample)
            .finish_non_exhaustive()
    }
}

impl TrueTypeProvider {
    /// Wrap a font file.
    ///
    /// Fails when the data does not parse as a font. Characters in
    /// `skip` are never mapped by this provider.
    pub fn new(
        data: Vec<u8>,
        size: f32,
        oversample: f32,
        shift: (f32, f32),
        skip: impl IntoIterator<Item = char>,
    ) -> Result<Self, FontError> {
        FontRef::new(&data)?;
        Ok(Self {
            data,
            size,
            oversample,
            shift_x: shift.0,
            shift_y: shift.1,
            skip: skip.into_iter().collect(),
        })
    }
}

impl FontProvider for TrueTypeProvider {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        if self.skip.contains(&c) {
            return None;
        }
        // Validated in `new`, so this only fails on a torn buffer.
        let font = FontRef::new(&self.data).ok()?;
        let gid = font.charmap().map(c)?;
        let metrics = font.glyph_metrics(
            Size::new(self.size * self.oversample),
            LocationRef::default(),
        );
        let bounds = metrics.bounds(gid)?;
        // Pixel box of the glyph at the subpixel shift; empty boxes have
        // no raster and defer to the next provider.
        let x0 = (bounds.x_min + self.shift_x).floor() as i32;
        let x1 = (bounds.x_max + self.shift_x).ceil() as i32;
        let y0 = (bounds.y_min + self.shift_y).floor() as i32;
        let y1 = (bounds.y_max + self.shift_y).ceil() as i32;
        let width = x1 - x0;
        let height = y1 - y0;
        if width == 0 || height == 0 {
            return None;
        }
        let advance = metrics.advance_width(gid)? / self.oversample;
        Some(GlyphMetrics {
            width,
            height,
            advance,
        })
    }
}
