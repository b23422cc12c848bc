// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advance table generation: resolve every UTF-16 code unit through a
//! provider chain into the fixed metrics table the display runtime
//! consumes.

use hudkit::metrics::FontMetrics;

use crate::providers::{FontProvider, ProviderChain};

/// Fill an advance table from a provider chain.
///
/// Every basic-plane code unit is resolved once; unresolved characters
/// and surrogate code units stay at 0.0.
pub fn generate(chain: &ProviderChain) -> FontMetrics {
    let mut table = FontMetrics::new();
    for unit in 0..=u16::MAX {
        let Some(c) = char::from_u32(u32::from(unit)) else {
            continue;
        };
        if let Some(glyph) = chain.glyph(c) {
            table.set(unit, glyph.advance);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::GlyphMetrics;

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
    fn earlier_providers_shadow_later_ones() {
        let mut chain = ProviderChain::new();
        chain.push(Fixed(vec![('A', 4.0)]));
        chain.push(Fixed(vec![('A', 9.0), ('B', 7.0)]));
        let table = generate(&chain);
        assert_eq!(table.unit_width(u16::from(b'A')), 4.0);
        assert_eq!(table.unit_width(u16::from(b'B')), 7.0);
        assert_eq!(table.unit_width(u16::from(b'C')), 0.0);
    }

    #[test]
    fn surrogate_units_stay_zero() {
        let mut chain = ProviderChain::new();
        chain.push(Fixed(vec![('A', 4.0)]));
        let table = generate(&chain);
        assert_eq!(table.unit_width(0xD800), 0.0);
    }
}
