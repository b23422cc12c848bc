// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors.

use core::fmt;

/// A color as a packed `0xAARRGGBB` code.
///
/// Defaults to opaque black. Channel setters can be chained:
///
/// ```
/// use hudkit::Color;
///
/// let c = Color::new().red(0xEE).green(0xAD).blue(0x0E).alpha(0x70);
/// assert_eq!(c.code(), 0x70EEAD0E);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Default for Color {
    fn default() -> Self {
        Self(0xFF00_0000)
    }
}

impl Color {
    /// Opaque black.
    pub fn new() -> Self {
        Self::default()
    }

    /// A color from a packed `0xAARRGGBB` code.
    pub fn from_code(code: u32) -> Self {
        Self(code)
    }

    /// The packed `0xAARRGGBB` code.
    pub fn code(self) -> u32 {
        self.0
    }

    /// Set all four channels at once.
    #[must_use]
    pub fn argb(self, alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        self.alpha(alpha).red(red).green(green).blue(blue)
    }

    /// Set the color channels, keeping the current alpha.
    #[must_use]
    pub fn rgb(self, red: u8, green: u8, blue: u8) -> Self {
        self.red(red).green(green).blue(blue)
    }

    fn set(self, value: u8, at: u32) -> Self {
        Self(self.0 & !(0xFF << at) | (u32::from(value) << at))
    }

    fn get(self, at: u32) -> u8 {
        (self.0 >> at) as u8
    }

    /// Set the alpha channel.
    #[must_use]
    pub fn alpha(self, alpha: u8) -> Self {
        self.set(alpha, 24)
    }

    /// The alpha channel.
    pub fn get_alpha(self) -> u8 {
        self.get(24)
    }

    /// Set the red channel.
    #[must_use]
    pub fn red(self, red: u8) -> Self {
        self.set(red, 16)
    }

    /// The red channel.
    pub fn get_red(self) -> u8 {
        self.get(16)
    }

    /// Set the green channel.
    #[must_use]
    pub fn green(self, green: u8) -> Self {
        self.set(green, 8)
    }

    /// The green channel.
    pub fn get_green(self) -> u8 {
        self.get(8)
    }

    /// Set the blue channel.
    #[must_use]
    pub fn blue(self, blue: u8) -> Self {
        self.set(blue, 0)
    }

    /// The blue channel.
    pub fn get_blue(self) -> u8 {
        self.get(0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color{{r={}, g={}, b={}, a={}, 0x{:08X}}}",
            self.get_red(),
            self.get_green(),
            self.get_blue(),
            self.get_alpha(),
            self.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn channel_roundtrip() {
        let c = Color::new().argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.get_alpha(), 0x12);
        assert_eq!(c.get_red(), 0x34);
        assert_eq!(c.get_green(), 0x56);
        assert_eq!(c.get_blue(), 0x78);
        assert_eq!(c.code(), 0x12345678);
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::new().code(), 0xFF00_0000);
    }

    #[test]
    fn display_pads_to_eight_digits() {
        let c = Color::from_code(0x0100_00FF);
        assert_eq!(c.to_string(), "Color{r=0, g=0, b=255, a=1, 0x010000FF}");
    }
}
