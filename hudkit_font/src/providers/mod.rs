// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metric providers and their resolution chain.
//!
//! A provider maps characters to glyph metrics; a chain tries providers
//! in declared order and the first hit wins. The order must match the
//! game client exactly, since the generated table has to agree with what
//! the client renders.

mod bitmap;
mod legacy;
mod truetype;

pub use bitmap::BitmapProvider;
pub use legacy::LegacyUnicodeProvider;
pub use truetype::TrueTypeProvider;

use crate::descriptor::{ProviderDescriptor, SkipSet};
use crate::error::FontError;
use crate::pixmap::Pixmap;
use crate::resource::{ResourceKey, ResourceLoader};

/// Metrics of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Glyph width in sheet pixels.
    pub width: i32,
    /// Glyph height in sheet pixels.
    pub height: i32,
    /// Horizontal distance to the next glyph origin.
    pub advance: f32,
}

/// A source of glyph metrics.
pub trait FontProvider {
    /// The metrics for a character, or `None` to defer to the next
    /// provider in the chain.
    fn glyph(&self, c: char) -> Option<GlyphMetrics>;
}

/// An ordered list of providers; the first `Some` wins.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn FontProvider>>,
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("len", &self.providers.len())
            .finish()
    }
}

impl ProviderChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider at the lowest remaining priority.
    pub fn push(&mut self, provider: impl FontProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Construct the providers a descriptor list declares and chain them
    /// in order.
    ///
    /// `fonts` resolves keys below the namespace root (the legacy width
    /// table), `textures` below the `textures` segment (glyph sheets and
    /// font files). A provider that fails to load is logged and skipped,
    /// leaving its characters to the remaining providers.
    pub fn extend_from_descriptors(
        &mut self,
        descriptors: &[ProviderDescriptor],
        fonts: &dyn ResourceLoader,
        textures: &dyn ResourceLoader,
    ) {
        for descriptor in descriptors {
            match Self::resolve(descriptor, fonts, textures) {
                Ok(Some(provider)) => self.providers.push(provider),
                Ok(None) => {}
                Err(err) => log::warn!("skipping font provider: {err}"),
            }
        }
    }

    fn resolve(
        descriptor: &ProviderDescriptor,
        fonts: &dyn ResourceLoader,
        textures: &dyn ResourceLoader,
    ) -> Result<Option<Box<dyn FontProvider>>, FontError> {
        Ok(match descriptor {
            ProviderDescriptor::Bitmap {
                file,
                height,
                ascent,
                chars,
            } => {
                let data = textures.open(&ResourceKey::parse(file)?)?;
                let image = Pixmap::from_png(data.as_slice())?;
                Some(Box::new(BitmapProvider::new(image, chars, *height, *ascent)?))
            }
            ProviderDescriptor::Ttf {
                file,
                shift,
                size,
                oversample,
                skip,
            } => {
                let data = textures.open(&ResourceKey::parse(file)?)?;
                let shift = crate::descriptor::validate_shift(shift.as_ref())?;
                let skip = skip.as_ref().map(SkipSet::chars).unwrap_or_default();
                Some(Box::new(TrueTypeProvider::new(
                    data, *size, *oversample, shift, skip,
                )?))
            }
            ProviderDescriptor::LegacyUnicode { sizes, .. } => {
                let table = fonts.open(&ResourceKey::parse(sizes)?)?;
                Some(Box::new(LegacyUnicodeProvider::new(table)))
            }
            ProviderDescriptor::Unknown => {
                log::warn!("unknown font provider type, skipping");
                None
            }
        })
    }
}

impl FontProvider for ProviderChain {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        self.providers.iter().find_map(|p| p.glyph(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<(char, f32)>);

    impl FontProvider for Fixed {
        fn glyph(&self, c: char) -> Option<GlyphMetrics> {
            self.0.iter().find(|(ch, _)| *ch == c).map(|(_, advance)| {
                GlyphMetrics {
                    width: 1,
                    height: 16,
                    advance: *advance,
                }
            })
        }
    }

    #[test]
    fn first_provider_wins() {
        let mut chain = ProviderChain::new();
        chain.push(Fixed(vec![('A', 4.0)]));
        chain.push(Fixed(vec![('A', 9.0), ('B', 7.0)]));
        assert_eq!(chain.glyph('A').map(|g| g.advance), Some(4.0));
        assert_eq!(chain.glyph('B').map(|g| g.advance), Some(7.0));
        assert_eq!(chain.glyph('C'), None);
    }
}
