// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type for glyph sheets.

use bytemuck::{Pod, Zeroable};

use crate::error::FontError;

/// A straight (non-premultiplied) RGBA8 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

/// A pixmap of straight RGBA8 values.
///
/// Glyph sheets only ever get sampled, never composited, so pixels stay
/// straight rather than premultiplied.
#[derive(Debug, Clone)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in row-major order.
    buf: Vec<Rgba8>,
    /// Whether the source image carried its own alpha channel.
    ///
    /// Grayscale sources without alpha keep their coverage in the
    /// luminance channel instead.
    source_has_alpha: bool,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![Rgba8::zeroed(); usize::from(width) * usize::from(height)];
        Self {
            width,
            height,
            buf,
            source_has_alpha: true,
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The pixel at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of bounds.
    pub fn sample(&self, x: u16, y: u16) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height);
        self.buf[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    /// The coverage channel the glyph width scan tests.
    ///
    /// Alpha for sources that carry one, luminance otherwise.
    pub fn luminance_or_alpha(&self, x: u16, y: u16) -> u8 {
        let pixel = self.sample(x, y);
        if self.source_has_alpha {
            pixel.a
        } else {
            pixel.r
        }
    }

    /// The underlying pixel buffer.
    pub fn data(&self) -> &[Rgba8] {
        &self.buf
    }

    /// The underlying pixel buffer as bytes.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    fn data_as_u8_slice_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.buf)
    }

    /// Decode a PNG into a pixmap.
    pub fn from_png(data: impl std::io::Read) -> Result<Self, FontError> {
        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(
            png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
        );

        let mut reader = decoder.read_info()?;
        let source_has_alpha = matches!(
            reader.info().color_type,
            png::ColorType::Rgba | png::ColorType::GrayscaleAlpha
        );
        let mut pixmap = {
            let info = reader.info();
            let width: u16 = info
                .width
                .try_into()
                .map_err(|_| png::DecodingError::LimitsExceeded)?;
            let height: u16 = info
                .height
                .try_into()
                .map_err(|_| png::DecodingError::LimitsExceeded)?;
            Self::new(width, height)
        };
        pixmap.source_has_alpha = source_has_alpha;

        // `reader.output_color_type()` reflects the requested transformations.
        let (color_type, bit_depth) = reader.output_color_type();
        debug_assert_eq!(
            bit_depth,
            png::BitDepth::Eight,
            "normalize_to_color8 means the bit depth is always 8."
        );

        match color_type {
            png::ColorType::Rgb | png::ColorType::Grayscale => {
                unreachable!("We set a transformation to always convert to alpha")
            }
            png::ColorType::Indexed => {
                unreachable!("Transformation should have expanded indexed images")
            }
            png::ColorType::Rgba => {
                debug_assert_eq!(
                    pixmap.data_as_u8_slice().len(),
                    reader.output_buffer_size(),
                    "The pixmap buffer should have the same number of bytes as the image."
                );
                reader.next_frame(pixmap.data_as_u8_slice_mut())?;
            }
            png::ColorType::GrayscaleAlpha => {
                let mut grayscale_data = vec![0; reader.output_buffer_size()];
                reader.next_frame(&mut grayscale_data)?;

                for (grayscale_pixel, pixmap_pixel) in
                    grayscale_data.chunks_exact(2).zip(pixmap.buf.iter_mut())
                {
                    let [gray, alpha] = [grayscale_pixel[0], grayscale_pixel[1]];
                    *pixmap_pixel = Rgba8 {
                        r: gray,
                        g: gray,
                        b: gray,
                        a: alpha,
                    };
                }
            }
        }

        Ok(pixmap)
    }

    /// Build a pixmap from raw pixels, for tests and synthetic sheets.
    ///
    /// # Panics
    ///
    /// Panics if `data` is not of length `width * height`.
    pub fn from_parts(data: Vec<Rgba8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "Expected `data` to have length of exactly `width * height`"
        );
        Self {
            width,
            height,
            buf: data,
            source_has_alpha: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    const WHITE: Rgba8 = Rgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    #[test]
    fn sampling_is_row_major() {
        let pixmap = Pixmap::from_parts(vec![CLEAR, WHITE, CLEAR, CLEAR], 2, 2);
        assert_eq!(pixmap.sample(1, 0), WHITE);
        assert_eq!(pixmap.luminance_or_alpha(1, 0), 255);
        assert_eq!(pixmap.luminance_or_alpha(0, 1), 0);
    }
}
