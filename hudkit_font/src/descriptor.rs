// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative font JSON: a list of provider descriptions of three
//! known shapes.

use serde::Deserialize;

use crate::error::FontError;

/// A parsed font JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct FontDescriptor {
    /// Providers in resolution order.
    pub providers: Vec<ProviderDescriptor>,
}

impl FontDescriptor {
    /// Parse a font JSON document.
    pub fn from_json(data: &[u8]) -> Result<Self, FontError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// One provider entry, tagged by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderDescriptor {
    /// A glyph sheet cut into a grid of monospaced cells.
    Bitmap {
        /// Sheet image key.
        file: String,
        /// Declared line height.
        #[serde(default = "default_height")]
        height: i32,
        /// Baseline distance from the cell top.
        ascent: i32,
        /// Grid rows; each character names its cell.
        chars: Vec<String>,
    },
    /// A TrueType font.
    Ttf {
        /// Font file key.
        file: String,
        /// Subpixel shift, exactly two numbers when present.
        #[serde(default)]
        shift: Option<Vec<f32>>,
        /// Pixel size.
        #[serde(default = "default_size")]
        size: f32,
        /// Oversampling factor.
        #[serde(default = "default_oversample")]
        oversample: f32,
        /// Characters this provider refuses to map.
        #[serde(default)]
        skip: Option<SkipSet>,
    },
    /// The packed per-code-unit width table of the legacy unicode font.
    LegacyUnicode {
        /// Width table key.
        sizes: String,
        /// Glyph sheet template; unused for metrics extraction.
        #[serde(default)]
        template: Option<String>,
    },
    /// A provider type this tool does not know; skipped with a warning.
    #[serde(other)]
    Unknown,
}

/// The `skip` field accepts a single string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkipSet {
    /// All characters of one string.
    One(String),
    /// All characters of every string, concatenated.
    Many(Vec<String>),
}

impl SkipSet {
    /// The skipped characters, flattened.
    pub fn chars(&self) -> Vec<char> {
        match self {
            Self::One(s) => s.chars().collect(),
            Self::Many(v) => v.iter().flat_map(|s| s.chars()).collect(),
        }
    }
}

fn default_height() -> i32 {
    8
}

fn default_size() -> f32 {
    11.0
}

fn default_oversample() -> f32 {
    1.0
}

/// Check the cross-field rules a bitmap descriptor must satisfy.
///
/// Rows must be non-empty and of equal length, and the ascent may not
/// exceed the height.
pub(crate) fn validate_bitmap(chars: &[String], height: i32, ascent: i32) -> Result<(), FontError> {
    if ascent > height {
        return Err(FontError::Descriptor(format!(
            "ascent {ascent} higher than height {height}"
        )));
    }
    let first = chars.first().map(|row| row.chars().count());
    match first {
        None | Some(0) => {
            return Err(FontError::Descriptor(
                "expected to find data in chars, found none".to_owned(),
            ));
        }
        Some(expected) => {
            for row in &chars[1..] {
                let found = row.chars().count();
                if found != expected {
                    return Err(FontError::Descriptor(format!(
                        "elements of chars have to be the same length \
                         (found: {found}, expected: {expected})"
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Check a ttf `shift` array and return its components.
pub(crate) fn validate_shift(shift: Option<&Vec<f32>>) -> Result<(f32, f32), FontError> {
    match shift {
        None => Ok((0.0, 0.0)),
        Some(values) if values.len() == 2 => Ok((values[0], values[1])),
        Some(values) => Err(FontError::Descriptor(format!(
            "expected 2 elements in 'shift', found {}",
            values.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_known_shapes() {
        let json = br#"{
            "providers": [
                {"type": "bitmap", "file": "font/ascii.png", "ascent": 7,
                 "chars": ["ab", "cd"]},
                {"type": "ttf", "file": "font/uniform.ttf", "shift": [0.0, 1.0],
                 "size": 9.0, "oversample": 2.0, "skip": "ab"},
                {"type": "legacy_unicode", "sizes": "font/glyph_sizes.bin",
                 "template": "font/unicode_page_%s.png"}
            ]
        }"#;
        let descriptor = FontDescriptor::from_json(json).unwrap();
        assert_eq!(descriptor.providers.len(), 3);
        match &descriptor.providers[0] {
            ProviderDescriptor::Bitmap { height, chars, .. } => {
                assert_eq!(*height, 8);
                assert_eq!(chars, &["ab", "cd"]);
            }
            other => panic!("unexpected provider {other:?}"),
        }
        match &descriptor.providers[1] {
            ProviderDescriptor::Ttf { skip, .. } => {
                assert_eq!(skip.as_ref().unwrap().chars(), ['a', 'b']);
            }
            other => panic!("unexpected provider {other:?}"),
        }
    }

    #[test]
    fn unknown_types_parse_as_unknown() {
        let json = br#"{"providers": [{"type": "space", "advances": {" ": 4}}]}"#;
        let descriptor = FontDescriptor::from_json(json).unwrap();
        assert!(matches!(
            descriptor.providers[0],
            ProviderDescriptor::Unknown
        ));
    }

    #[test]
    fn skip_accepts_string_arrays() {
        let json = br#"{"providers": [{"type": "ttf", "file": "f.ttf",
            "skip": ["ab", "c"]}]}"#;
        let descriptor = FontDescriptor::from_json(json).unwrap();
        match &descriptor.providers[0] {
            ProviderDescriptor::Ttf { skip, .. } => {
                assert_eq!(skip.as_ref().unwrap().chars(), ['a', 'b', 'c']);
            }
            other => panic!("unexpected provider {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = validate_bitmap(&["ab".into(), "abc".into()], 8, 7).unwrap_err();
        assert!(err.to_string().contains("found: 3, expected: 2"));
    }

    #[test]
    fn ascent_may_not_exceed_height() {
        let err = validate_bitmap(&["ab".into()], 8, 9).unwrap_err();
        assert!(err.to_string().contains("ascent 9 higher than height 8"));
    }

    #[test]
    fn shift_must_have_two_elements() {
        assert!(validate_shift(Some(&vec![1.0])).is_err());
        assert_eq!(validate_shift(None).unwrap(), (0.0, 0.0));
        assert_eq!(validate_shift(Some(&vec![0.5, 1.5])).unwrap(), (0.5, 1.5));
    }
}
