// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client font metrics: per-code-unit advance widths used to size text
//! server-side without access to the client's renderer.
//!
//! The table is indexed by UTF-16 code unit, matching how the client
//! iterates strings. An entry of `0.0` means the code unit is unmapped
//! and takes no horizontal space.

use crate::error::BuildError;

/// Number of table entries, one per UTF-16 code unit.
const TABLE_LEN: usize = 0x10000;

/// Advance widths for every UTF-16 code unit, plus string measurement.
#[derive(Clone, PartialEq)]
pub struct FontMetrics {
    widths: Box<[f32]>,
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mapped = self.widths.iter().filter(|w| **w != 0.0).count();
        f.debug_struct("FontMetrics").field("mapped", &mapped).finish()
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics {
    /// Height of one text line, in GUI pixels.
    pub const LINE_HEIGHT: f32 = 9.5;

    /// Size of the serialized table, in bytes.
    pub const BYTE_LEN: usize = TABLE_LEN * 4;

    /// A table with every code unit unmapped.
    pub fn new() -> Self {
        Self {
            widths: vec![0.0; TABLE_LEN].into_boxed_slice(),
        }
    }

    /// Set the advance width of one code unit.
    pub fn set(&mut self, unit: u16, width: f32) {
        self.widths[unit as usize] = width;
    }

    /// The advance width of one code unit. `0.0` when unmapped.
    pub fn unit_width(&self, unit: u16) -> f32 {
        self.widths[unit as usize]
    }

    /// The advance width of a character.
    ///
    /// Characters outside the basic multilingual plane sum the widths of
    /// their surrogate code units, which are unmapped in practice.
    pub fn width(&self, ch: char) -> f32 {
        let mut buf = [0_u16; 2];
        ch.encode_utf16(&mut buf)
            .iter()
            .map(|unit| self.unit_width(*unit))
            .sum()
    }

    /// The rendered width of one line.
    ///
    /// A `§` starts a two-character formatting code; neither character
    /// takes horizontal space.
    pub fn line_width(&self, line: &str) -> f32 {
        let mut width = 0.0;
        let mut chars = line.chars();
        while let Some(ch) = chars.next() {
            if ch == '§' {
                chars.next();
                continue;
            }
            width += self.width(ch);
        }
        width
    }

    /// The bounding size of a block of lines at the given scale.
    ///
    /// Entries containing `'\n'` count as several lines.
    pub fn measure<S: AsRef<str>>(&self, lines: &[S], scale: f32) -> (f32, f32) {
        let mut width = 0.0_f32;
        let mut count = 0_usize;
        for entry in lines {
            for line in crate::input::split_lines(entry.as_ref()) {
                count += 1;
                width = width.max(self.line_width(&line));
            }
        }
        let height = count as f32 * Self::LINE_HEIGHT;
        (width * scale, height * scale)
    }

    /// Serialize the table as big-endian IEEE-754 floats, in code unit
    /// order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTE_LEN);
        for width in self.widths.iter() {
            bytes.extend_from_slice(&width.to_be_bytes());
        }
        bytes
    }

    /// Deserialize a table written by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BuildError> {
        if bytes.len() != Self::BYTE_LEN {
            return Err(BuildError::MetricsLength {
                expected: Self::BYTE_LEN,
                found: bytes.len(),
            });
        }
        let mut table = Self::new();
        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            let raw = [chunk[0], chunk[1], chunk[2], chunk[3]];
            table.widths[i] = f32::from_be_bytes(raw);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_round_trip() {
        let mut table = FontMetrics::new();
        table.set(0, 1.5);
        table.set(b'A'.into(), 6.0);
        table.set(0xFFFF, 4.0);
        let bytes = table.to_bytes();
        assert_eq!(bytes.len(), FontMetrics::BYTE_LEN);
        let back = FontMetrics::from_bytes(&bytes).unwrap();
        assert_eq!(back.unit_width(0), 1.5);
        assert_eq!(back.unit_width(b'A'.into()), 6.0);
        assert_eq!(back.unit_width(0xFFFF), 4.0);
        assert_eq!(back.unit_width(1), 0.0);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let err = FontMetrics::from_bytes(&[0_u8; 16]).unwrap_err();
        assert_eq!(
            err,
            BuildError::MetricsLength {
                expected: FontMetrics::BYTE_LEN,
                found: 16,
            }
        );
    }

    #[test]
    fn color_codes_take_no_space() {
        let mut table = FontMetrics::new();
        table.set(b'a'.into(), 6.0);
        table.set(0x00A7, 5.0);
        assert_eq!(table.line_width("§4aa"), 12.0);
        assert_eq!(table.line_width("aa"), 12.0);
        // A trailing marker swallows nothing and still takes no space.
        assert_eq!(table.line_width("aa§"), 12.0);
    }

    #[test]
    fn measure_takes_the_widest_line() {
        let mut table = FontMetrics::new();
        table.set(b'x'.into(), 4.0);
        let (w, h) = table.measure(&["x", "xxx", "xx"], 2.0);
        assert_eq!(w, 24.0);
        assert_eq!(h, 3.0 * FontMetrics::LINE_HEIGHT * 2.0);
    }

    #[test]
    fn measure_splits_embedded_newlines() {
        let mut table = FontMetrics::new();
        table.set(b'a'.into(), 6.0);
        table.set(b'b'.into(), 6.0);
        let (w, h) = table.measure(&["a\nb"], 1.0);
        assert_eq!(w, 6.0);
        assert_eq!(h, 2.0 * FontMetrics::LINE_HEIGHT);
    }
}
